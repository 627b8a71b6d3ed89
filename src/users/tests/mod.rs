// src/users/tests/mod.rs
