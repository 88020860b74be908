//! Test support: a shared `PostgreSQL` container with one database per test.


pub(crate) use context::TestContext;
