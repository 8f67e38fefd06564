//! Grouped emoji catalogue
//!
//! Groups and subgroups follow emoji-test.txt. Names from earlier
//! editions are kept as a legacy list so lookups can tell a retired
//! category from one that never existed.

use std::collections::HashMap;

use serde::Serialize;

use crate::data::config::CatalogueConfig;
use crate::diagnostic::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::Result;

/// Subgroup with its ordered emoji
#[derive(Debug, Clone, Serialize)]
pub struct Subgroup {
    name: String,
    emoji: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl Subgroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn emoji(&self) -> &[String] {
        &self.emoji
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Group with its ordered subgroups
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    name: String,
    subgroups: Vec<Subgroup>,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subgroups(&self) -> &[Subgroup] {
        &self.subgroups
    }

    /// Subgroup by exact name, without diagnostics
    pub fn subgroup(&self, name: &str) -> Option<&Subgroup> {
        self.subgroups.iter().find(|s| s.name == name)
    }
}

/// Read-only emoji catalogue
#[derive(Debug, Clone)]
pub struct Catalogue {
    version: String,
    groups: Vec<Group>,
    legacy_groups: Vec<String>,
    legacy_subgroups: Vec<String>,
    /// emoji -> (group index, subgroup index)
    index: HashMap<String, (usize, usize)>,
}

impl Catalogue {
    pub fn from_config(config: &CatalogueConfig) -> Result<Self> {
        config.validate()?;

        let groups: Vec<Group> = config
            .groups
            .iter()
            .map(|g| Group {
                name: g.name.clone(),
                subgroups: g
                    .subgroups
                    .iter()
                    .map(|s| Subgroup {
                        name: s.name.clone(),
                        emoji: s.emoji.clone(),
                        description: s.description.clone(),
                    })
                    .collect(),
            })
            .collect();

        let mut index = HashMap::new();
        for (gi, group) in groups.iter().enumerate() {
            for (si, subgroup) in group.subgroups.iter().enumerate() {
                for emoji in &subgroup.emoji {
                    index.entry(emoji.clone()).or_insert((gi, si));
                }
            }
        }

        tracing::debug!(
            version = %config.metadata.version,
            groups = groups.len(),
            emoji = index.len(),
            "built emoji catalogue"
        );

        Ok(Self {
            version: config.metadata.version.clone(),
            groups,
            legacy_groups: config.legacy.groups.clone(),
            legacy_subgroups: config.legacy.subgroups.clone(),
            index,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// All groups in catalogue order
    pub fn list(&self) -> &[Group] {
        &self.groups
    }

    /// Group by name; missing names are reported as warnings
    pub fn list_group(&self, group: &str) -> Option<&Group> {
        self.list_group_with(group, &TracingSink)
    }

    /// Emoji of one subgroup; missing names are reported as warnings
    pub fn list_subgroup(&self, group: &str, subgroup: &str) -> Option<&[String]> {
        self.list_subgroup_with(group, subgroup, &TracingSink)
    }

    pub fn list_group_with(&self, group: &str, sink: &dyn DiagnosticSink) -> Option<&Group> {
        let found = self.group(group);
        if found.is_none() {
            let retired = self.legacy_groups.iter().any(|g| g == group);
            sink.emit(&Diagnostic::unknown_category(group, retired));
        }
        found
    }

    pub fn list_subgroup_with(
        &self,
        group: &str,
        subgroup: &str,
        sink: &dyn DiagnosticSink,
    ) -> Option<&[String]> {
        let group = self.list_group_with(group, sink)?;
        match group.subgroup(subgroup) {
            Some(s) => Some(s.emoji()),
            None => {
                let retired = self.legacy_subgroups.iter().any(|s| s == subgroup);
                sink.emit(&Diagnostic::unknown_category(subgroup, retired));
                None
            }
        }
    }

    /// Group by exact name, without diagnostics
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Group and subgroup holding `emoji`, if catalogued
    pub fn locate(&self, emoji: &str) -> Option<(&Group, &Subgroup)> {
        let &(gi, si) = self.index.get(emoji)?;
        let group = self.groups.get(gi)?;
        Some((group, group.subgroups.get(si)?))
    }

    /// Number of catalogued emoji
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::CollectingSink;

    fn catalogue() -> Catalogue {
        let config: CatalogueConfig = toml::from_str(
            r#"
            [metadata]
            version = "test"

            [legacy]
            groups = ["Smileys & People"]
            subgroups = ["face-positive"]

            [[group]]
            name = "Smileys & Emotion"

            [[group.subgroup]]
            name = "face-smiling"
            emoji = ["😀", "😃"]

            [[group.subgroup]]
            name = "face-glasses"
            emoji = ["😎", "🤓"]
            description = "faces wearing glasses"

            [[group]]
            name = "Flags"

            [[group.subgroup]]
            name = "country-flag"
            emoji = ["🇵🇹"]
            "#,
        )
        .unwrap();
        Catalogue::from_config(&config).unwrap()
    }

    #[test]
    fn test_list_in_order() {
        let catalogue = catalogue();
        let names: Vec<_> = catalogue.list().iter().map(|g| g.name()).collect();
        assert_eq!(names, ["Smileys & Emotion", "Flags"]);
        assert_eq!(catalogue.len(), 5);
    }

    #[test]
    fn test_list_subgroup() {
        let catalogue = catalogue();
        let sink = CollectingSink::new();

        let glasses = catalogue
            .list_subgroup_with("Smileys & Emotion", "face-glasses", &sink)
            .unwrap();
        assert_eq!(glasses, ["😎", "🤓"]);
        assert!(sink.diagnostics().is_empty());

        let group = catalogue.list_group("Smileys & Emotion").unwrap();
        assert_eq!(
            group.subgroup("face-glasses").unwrap().description(),
            Some("faces wearing glasses")
        );
    }

    #[test]
    fn test_retired_group_reports_and_returns_none() {
        let catalogue = catalogue();
        let sink = CollectingSink::new();

        assert!(catalogue
            .list_subgroup_with("Smileys & People", "face-positive", &sink)
            .is_none());

        let diagnostics = sink.take();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].to_string(),
            "The category of Smileys & People does not exist anymore"
        );
    }

    #[test]
    fn test_unknown_subgroup_reports() {
        let catalogue = catalogue();
        let sink = CollectingSink::new();

        assert!(catalogue
            .list_subgroup_with("Smileys & Emotion", "face-positive", &sink)
            .is_none());
        assert!(catalogue.list_group_with("Gadgets", &sink).is_none());

        let diagnostics = sink.take();
        assert!(diagnostics[0].retired);
        assert_eq!(diagnostics[1].category, "Gadgets");
        assert!(!diagnostics[1].retired);
    }

    #[test]
    fn test_locate() {
        let catalogue = catalogue();
        let (group, subgroup) = catalogue.locate("🇵🇹").unwrap();
        assert_eq!(group.name(), "Flags");
        assert_eq!(subgroup.name(), "country-flag");
        assert!(catalogue.locate("🦀").is_none());
    }
}
