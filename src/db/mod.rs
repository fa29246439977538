/*!
Databases for holding information relevant to a session.

- The [symbol database](symbol) binds names to phonemes.
- The [implication database](implication) holds a minimal collection of implications between phonemes.

Each database is owned by a [context](crate::context), and all access to a database outside the library is through its methods.
Phonemes are copied into and out of each database.
*/

pub mod implication;
pub mod symbol;
