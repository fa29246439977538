/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and the databases of a context copy the parts relevant to them when the context is built.

```rust
# use pyre::config::{Config, MergePolicy};
let mut config = Config::default();
assert_eq!(config.merge_policy.value, MergePolicy::Skip);

assert!(config.merge_policy.set(MergePolicy::Strict));
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod merge_policy;
pub use merge_policy::MergePolicy;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// What to do when the features merged into a symbol, or into the consequent of a stored implication, contradict those already present.
    pub merge_policy: ConfigOption<MergePolicy>,
}

impl Default for Config {
    /// The default context keeps a session going: contradicting features are skipped and reported, and everything else applies.
    fn default() -> Self {
        Config {
            merge_policy: ConfigOption {
                name: "merge_policy",
                min: MergePolicy::MIN,
                max: MergePolicy::MAX,
                value: MergePolicy::Skip,
            },
        }
    }
}
