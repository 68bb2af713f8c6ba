//! The known library families and their static membership sets.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

/// A named group of related library modules expected to share one release
/// version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Family {
    Pekko,
    PekkoHttp,
    PekkoConnectors,
    /// Not part of any known family; excluded from all version checks.
    Unclassified,
}

impl Family {
    /// The families that get verified, in the fixed check (and priority)
    /// order.
    pub const CHECK_ORDER: [Family; 3] =
        [Family::Pekko, Family::PekkoHttp, Family::PekkoConnectors];

    /// Human-readable label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Family::Pekko => "Pekko",
            Family::PekkoHttp => "Pekko HTTP",
            Family::PekkoConnectors => "Pekko Connectors",
            Family::Unclassified => "Unclassified",
        }
    }

    /// The base module names (cross-build suffix stripped) owned by this
    /// family. Empty for [`Family::Unclassified`].
    pub fn members(&self) -> &'static HashSet<&'static str> {
        match self {
            Family::Pekko => &PEKKO_MODULES,
            Family::PekkoHttp => &PEKKO_HTTP_MODULES,
            Family::PekkoConnectors => &PEKKO_CONNECTORS_MODULES,
            Family::Unclassified => &NO_MODULES,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

static PEKKO_MODULES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "pekko-actor",
        "pekko-actor-typed",
        "pekko-actor-testkit-typed",
        "pekko-cluster",
        "pekko-cluster-typed",
        "pekko-cluster-sharding",
        "pekko-cluster-sharding-typed",
        "pekko-cluster-tools",
        "pekko-coordination",
        "pekko-discovery",
        "pekko-distributed-data",
        "pekko-multi-node-testkit",
        "pekko-persistence",
        "pekko-persistence-typed",
        "pekko-persistence-query",
        "pekko-pki",
        "pekko-protobuf-v3",
        "pekko-remote",
        "pekko-serialization-jackson",
        "pekko-slf4j",
        "pekko-stream",
        "pekko-stream-typed",
        "pekko-stream-testkit",
        "pekko-testkit",
    ])
});

static PEKKO_HTTP_MODULES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "pekko-http",
        "pekko-http-core",
        "pekko-http-caching",
        "pekko-http-cors",
        "pekko-http-jackson",
        "pekko-http-spray-json",
        "pekko-http-testkit",
        "pekko-http-xml",
        "pekko-parsing",
    ])
});

static PEKKO_CONNECTORS_MODULES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "pekko-connectors-csv",
        "pekko-connectors-file",
        "pekko-connectors-jms",
        "pekko-connectors-kafka",
        "pekko-connectors-kafka-testkit",
        "pekko-connectors-s3",
    ])
});

static NO_MODULES: LazyLock<HashSet<&'static str>> = LazyLock::new(HashSet::new);
