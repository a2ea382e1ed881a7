use dioxus::prelude::*;
use gopherlife_shared::update_loop::LinkStatus;

fn status_class(status: &LinkStatus) -> &'static str {
    match status {
        LinkStatus::Connecting => "status-badge connecting",
        LinkStatus::Live => "status-badge live",
        LinkStatus::Retrying { .. } => "status-badge degraded",
        LinkStatus::Down { .. } => "status-badge down",
    }
}

/// Connection indicator for the update loop. Stays visible while degraded so a
/// stalled world never looks like a paused one.
#[component]
pub fn StatusBadge(status: LinkStatus) -> Element {
    let class = status_class(&status);
    let label = status.label();

    rsx! {
        span {
            class: "{class}",
            role: "status",
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_status_class_per_state() {
        assert_eq!(status_class(&LinkStatus::Live), "status-badge live");
        assert_eq!(
            status_class(&LinkStatus::Retrying { attempt: 1, delay: Duration::from_millis(500) }),
            "status-badge degraded"
        );
        assert_eq!(
            status_class(&LinkStatus::Down { reason: "gone".into() }),
            "status-badge down"
        );
    }
}
