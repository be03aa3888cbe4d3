//! Prometheus metrics.
//!
//! Recording goes through the `metrics` facade and is a no-op until a recorder
//! is installed with [`install_recorder`].

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::domain::Scheme;

/// Generation requests, labelled by scheme.
pub const REQUESTS_TOTAL: &str = "mailvariant_requests_total";

/// Addresses produced, labelled by scheme.
pub const VARIANTS_GENERATED_TOTAL: &str = "mailvariant_variants_generated_total";

/// Rejected requests, labelled by reason.
pub const REJECTED_TOTAL: &str = "mailvariant_rejected_total";

/// Addresses per request, labelled by scheme.
pub const VARIANTS_PER_REQUEST: &str = "mailvariant_variants_per_request";

/// Install the global Prometheus recorder and describe the service metrics.
///
/// # Errors
///
/// Returns an error if a global recorder is already installed.
pub fn install_recorder() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!(REQUESTS_TOTAL, "Variant generation requests");
    describe_counter!(VARIANTS_GENERATED_TOTAL, "Email variants generated");
    describe_counter!(REJECTED_TOTAL, "Generation requests rejected by validation");
    describe_histogram!(VARIANTS_PER_REQUEST, "Email variants generated per request");

    Ok(handle)
}

/// Record a completed generation.
pub fn record_generated(scheme: Scheme, count: usize) {
    counter!(REQUESTS_TOTAL, "scheme" => scheme.as_str()).increment(1);
    counter!(VARIANTS_GENERATED_TOTAL, "scheme" => scheme.as_str()).increment(count as u64);
    #[allow(clippy::cast_precision_loss)]
    let observed = count as f64;
    histogram!(VARIANTS_PER_REQUEST, "scheme" => scheme.as_str()).record(observed);
}

/// Record a rejected request.
pub fn record_rejected(reason: &'static str) {
    counter!(REJECTED_TOTAL, "reason" => reason).increment(1);
}

/// Render the exposition text served on the metrics endpoint.
#[must_use]
pub fn render(handle: Option<&PrometheusHandle>) -> String {
    let mut output = String::new();

    output.push_str("# HELP mailvariant_up Whether the service is up\n");
    output.push_str("# TYPE mailvariant_up gauge\n");
    output.push_str("mailvariant_up 1\n");

    if let Some(handle) = handle {
        output.push_str(&handle.render());
    }

    output
}

#[cfg(test)]
mod tests {
    use metrics_exporter_prometheus::PrometheusRecorder;

    use super::*;
    use crate::config::GenerationConfig;
    use crate::domain::GenerateBody;
    use crate::service::VariantService;

    fn body(email: &str) -> GenerateBody {
        GenerateBody {
            email: email.to_string(),
            ..Default::default()
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let recorder: PrometheusRecorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        metrics::with_local_recorder(&recorder, f);
        render(Some(&handle))
    }

    #[test]
    fn test_render_without_recorder() {
        let text = render(None);
        assert!(text.contains("mailvariant_up 1"));
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_generated(Scheme::Dot, 3);
        record_rejected("bad_request");
    }

    #[test]
    fn test_generation_is_recorded() {
        let service = VariantService::new(&GenerationConfig::default());

        let text = capture(|| {
            service.generate_from(&body("ab@gmail.com")).unwrap();
        });

        assert!(text.contains("mailvariant_up 1"));
        assert!(text.contains(r#"mailvariant_requests_total{scheme="dot"} 1"#));
        assert!(text.contains(r#"mailvariant_variants_generated_total{scheme="dot"} 2"#));
        assert!(text.contains(r#"mailvariant_variants_per_request_count{scheme="dot"} 1"#));
    }

    #[test]
    fn test_rejection_is_recorded() {
        let service = VariantService::new(&GenerationConfig::default());

        let text = capture(|| {
            assert!(service.generate_from(&body("john@outlook.com")).is_err());
            assert!(service.generate_from(&body("")).is_err());
        });

        assert!(text.contains(r#"mailvariant_rejected_total{reason="scheme_mismatch"} 1"#));
        assert!(text.contains(r#"mailvariant_rejected_total{reason="empty_input"} 1"#));
        assert!(!text.contains("mailvariant_requests_total"));
    }
}
