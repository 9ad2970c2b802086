//! Default values for adstxt-merge.

use indexmap::IndexMap;
use std::path::PathBuf;

/// Aggregated file written in production.
pub const DEFAULT_PROD_OUTPUT: &str = "app-ads.txt";

/// Aggregated file written in the test environment.
pub const DEFAULT_TEST_OUTPUT: &str = "app-ads.test.txt";

/// Directory holding the build log.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Build log file name.
pub const DEFAULT_LOG_FILE: &str = "ads-build-latest.log";

/// Built-in network table, in processing order.
const DEFAULT_NETWORKS: &[(&str, &str)] = &[
    ("Admob", "ads/admob.txt"),
    ("Meta", "ads/meta.txt"),
    ("Applovin", "ads/applovin.txt"),
    ("Mintegral", "ads/mintegral.txt"),
    ("Liftoff", "ads/liftoff.txt"),
    ("Unity", "ads/unity.txt"),
    ("Inmobi Admob", "ads/inmobi_admob.txt"),
    ("Inmobi MAX", "ads/inmobi_max.txt"),
    ("Pangle", "ads/Pangle.txt"),
    ("Reklam", "ads/Reklam.txt"),
    ("DT Exchange", "ads/dt_exchange.txt"),
    ("Yandex", "ads/yandex.txt"),
];

/// The built-in network table.
#[must_use]
pub fn default_networks() -> IndexMap<String, PathBuf> {
    DEFAULT_NETWORKS
        .iter()
        .map(|(name, path)| ((*name).to_string(), PathBuf::from(path)))
        .collect()
}
