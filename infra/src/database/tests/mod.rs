mod connection_tests;
mod repository_tests;
