// core/src/metrics.rs
use once_cell::sync::Lazy;
use prometheus::{IntCounter, Registry};

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

fn register_counter(name: &str, help: &str) -> IntCounter {
    let c = IntCounter::new(name, help).unwrap();
    REGISTRY.register(Box::new(c.clone())).unwrap();
    c
}

static PACKAGES_BUILT: Lazy<IntCounter> = Lazy::new(|| {
    register_counter(
        "trainlog_packages_built_total",
        "Antall pakker som ble bygget til en økt",
    )
});

static PACKAGES_REJECTED: Lazy<IntCounter> = Lazy::new(|| {
    register_counter(
        "trainlog_packages_rejected_total",
        "Antall pakker avvist ved bygging (kode/aritet/forutsetning)",
    )
});

static REPORTS_RENDERED: Lazy<IntCounter> = Lazy::new(|| {
    register_counter(
        "trainlog_reports_rendered_total",
        "Antall rapportlinjer rendret",
    )
});

pub fn packages_built_total() -> &'static IntCounter {
    &PACKAGES_BUILT
}

pub fn packages_rejected_total() -> &'static IntCounter {
    &PACKAGES_REJECTED
}

pub fn reports_rendered_total() -> &'static IntCounter {
    &REPORTS_RENDERED
}

/// Alle registrerte familier, for eksport/scrape hos kalleren.
pub fn gather() -> Vec<prometheus::proto::MetricFamily> {
    REGISTRY.gather()
}
