//! Handler methods for the App struct.
//!
//! Business logic reactions to messages live here, separated from the main
//! app module: file selection and the run flow (validate, provision,
//! invoke, report).

mod browse;
mod run;
