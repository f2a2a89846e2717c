//! Integration tests for the `fwint` system of crates are under `tests/`
