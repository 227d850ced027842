mod credential_tests;
mod token_tests;
