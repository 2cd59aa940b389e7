//! Tests for the signup service

mod support;

mod verify_tests;
