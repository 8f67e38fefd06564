//! Bundled catalogue lookups

use emoseq_core::{catalogue, CollectingSink, DiagnosticKind};

#[test]
fn test_groups_and_subgroups() {
    let catalogue = catalogue().unwrap();

    let groups: Vec<_> = catalogue.list().iter().map(|g| g.name()).collect();
    assert!(groups.contains(&"Smileys & Emotion"));
    assert_eq!(groups.last(), Some(&"Flags"));

    let smileys = catalogue.list_group("Smileys & Emotion").unwrap();
    assert!(smileys.subgroup("face-glasses").is_some());

    let glasses = catalogue
        .list_subgroup("Smileys & Emotion", "face-glasses")
        .unwrap();
    assert!(glasses.iter().any(|e| e == "😎"));
}

#[test]
fn test_retired_category() {
    let catalogue = catalogue().unwrap();
    let sink = CollectingSink::new();

    let result = catalogue.list_subgroup_with("Smileys & People", "face-positive", &sink);
    assert!(result.is_none());

    let diagnostics = sink.take();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::UnknownCategory);
    assert_eq!(
        diagnostics[0].to_string(),
        "The category of Smileys & People does not exist anymore"
    );
}

#[test]
fn test_locate_emoji() {
    let catalogue = catalogue().unwrap();

    let (group, subgroup) = catalogue.locate("😎").unwrap();
    assert_eq!(group.name(), "Smileys & Emotion");
    assert_eq!(subgroup.name(), "face-glasses");

    let (group, _) = catalogue.locate("🇵🇹").unwrap();
    assert_eq!(group.name(), "Flags");
}
