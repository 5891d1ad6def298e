use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};

/// Kind of an entry in the resource catalog.
///
/// The wire form is the upper snake case tag used by the catalog API.
/// Tags this enum does not know about deserialize to [`EntityType::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    Source,
    Space,
    Home,
    Folder,
    VirtualDataset,
    PhysicalDataset,
    PhysicalDatasetSourceFile,
    PhysicalDatasetSourceFolder,
    PhysicalDatasetHomeFile,
    PhysicalDatasetHomeFolder,
    /// A plain file that has not been promoted to a dataset.
    File,
    Function,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Classification of an [`EntityType`].
///
/// Container and dataset types are disjoint; everything else is a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityClass {
    /// Structural entries that always permit expansion.
    Container,
    /// Queryable datasets, expandable unless traversal stops at datasets.
    Dataset,
    /// Neither of the above; never expandable.
    Leaf,
}

impl EntityType {
    /// Every known type, in catalog order.
    pub const ALL: [EntityType; 13] = [
        EntityType::Source,
        EntityType::Space,
        EntityType::Home,
        EntityType::Folder,
        EntityType::VirtualDataset,
        EntityType::PhysicalDataset,
        EntityType::PhysicalDatasetSourceFile,
        EntityType::PhysicalDatasetSourceFolder,
        EntityType::PhysicalDatasetHomeFile,
        EntityType::PhysicalDatasetHomeFolder,
        EntityType::File,
        EntityType::Function,
        EntityType::Unknown,
    ];

    pub fn class(self) -> EntityClass {
        match self {
            EntityType::Source | EntityType::Space | EntityType::Home | EntityType::Folder => {
                EntityClass::Container
            }
            EntityType::VirtualDataset
            | EntityType::PhysicalDataset
            | EntityType::PhysicalDatasetSourceFile
            | EntityType::PhysicalDatasetSourceFolder
            | EntityType::PhysicalDatasetHomeFile
            | EntityType::PhysicalDatasetHomeFolder => EntityClass::Dataset,
            EntityType::File | EntityType::Function | EntityType::Unknown => EntityClass::Leaf,
        }
    }

    pub fn is_container(self) -> bool {
        self.class() == EntityClass::Container
    }

    pub fn is_dataset(self) -> bool {
        self.class() == EntityClass::Dataset
    }

    /// Parses a wire tag exactly as a catalog snapshot would.
    ///
    /// Tags are case sensitive and not trimmed. Unrecognised tags map to `Unknown`.
    pub fn from_tag(tag: &str) -> Self {
        let de: StrDeserializer<'_, ValueError> = tag.into_deserializer();
        EntityType::deserialize(de).unwrap_or_default()
    }

    /// Returns the wire tag.
    pub fn tag(self) -> &'static str {
        match self {
            EntityType::Source => "SOURCE",
            EntityType::Space => "SPACE",
            EntityType::Home => "HOME",
            EntityType::Folder => "FOLDER",
            EntityType::VirtualDataset => "VIRTUAL_DATASET",
            EntityType::PhysicalDataset => "PHYSICAL_DATASET",
            EntityType::PhysicalDatasetSourceFile => "PHYSICAL_DATASET_SOURCE_FILE",
            EntityType::PhysicalDatasetSourceFolder => "PHYSICAL_DATASET_SOURCE_FOLDER",
            EntityType::PhysicalDatasetHomeFile => "PHYSICAL_DATASET_HOME_FILE",
            EntityType::PhysicalDatasetHomeFolder => "PHYSICAL_DATASET_HOME_FOLDER",
            EntityType::File => "FILE",
            EntityType::Function => "FUNCTION",
            EntityType::Unknown => "UNKNOWN",
        }
    }

    /// Returns a human-readable name for the type.
    pub fn display_name(self) -> &'static str {
        match self {
            EntityType::Source => "Source",
            EntityType::Space => "Space",
            EntityType::Home => "Home",
            EntityType::Folder => "Folder",
            EntityType::VirtualDataset => "View",
            EntityType::PhysicalDataset
            | EntityType::PhysicalDatasetSourceFile
            | EntityType::PhysicalDatasetSourceFolder
            | EntityType::PhysicalDatasetHomeFile
            | EntityType::PhysicalDatasetHomeFolder => "Table",
            EntityType::File => "File",
            EntityType::Function => "Function",
            EntityType::Unknown => "Unknown",
        }
    }
}

impl EntityClass {
    pub fn display_name(self) -> &'static str {
        match self {
            EntityClass::Container => "container",
            EntityClass::Dataset => "dataset",
            EntityClass::Leaf => "leaf",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_are_disjoint() {
        for t in EntityType::ALL {
            assert!(!(t.is_container() && t.is_dataset()), "{:?} in both sets", t);
        }
    }

    #[test]
    fn test_tag_round_trips_through_from_tag() {
        for t in EntityType::ALL {
            assert_eq!(EntityType::from_tag(t.tag()), t);
        }
        assert_eq!(EntityType::from_tag("folder"), EntityType::Unknown);
        assert_eq!(EntityType::from_tag("SOMETHING_NEW"), EntityType::Unknown);
    }

    #[test]
    fn test_from_tag_agrees_with_snapshot_parsing() {
        for tag in ["FOLDER", "folder", " FOLDER ", "Virtual_Dataset", "VIRTUAL_DATASET", ""] {
            let parsed: EntityType =
                serde_json::from_value(serde_json::Value::String(tag.to_string())).unwrap();
            assert_eq!(EntityType::from_tag(tag), parsed, "tag {:?}", tag);
        }
        assert_eq!(EntityType::from_tag(" FOLDER "), EntityType::Unknown);
    }

    #[test]
    fn test_serde_uses_wire_tags() {
        let t: EntityType = serde_json::from_str("\"PHYSICAL_DATASET_HOME_FILE\"").unwrap();
        assert_eq!(t, EntityType::PhysicalDatasetHomeFile);

        let t: EntityType = serde_json::from_str("\"NOT_A_TYPE\"").unwrap();
        assert_eq!(t, EntityType::Unknown);

        assert_eq!(
            serde_json::to_string(&EntityType::VirtualDataset).unwrap(),
            "\"VIRTUAL_DATASET\""
        );
    }
}
