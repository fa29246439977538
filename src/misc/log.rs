/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library, primarily at the points where a database is revised.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [symbol database](crate::db::symbol)
    pub const SYMBOL_DB: &str = "symbol_db";

    /// Logs related to the [implication database](crate::db::implication)
    pub const IMPLICATION_DB: &str = "implication_db";

    /// Logs related to [parsing](crate::language)
    pub const PARSE: &str = "parse";

    /// Logs related to the application of assertions to a [context](crate::context)
    pub const CONTEXT: &str = "context";
}
