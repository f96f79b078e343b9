//! Unit tests for domain entities

mod signup_form_tests;
