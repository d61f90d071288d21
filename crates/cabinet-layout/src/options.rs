use crate::constants::*;
use crate::cutlist::CutListParams;
use crate::solver::SizeSet;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every input of a layout plan
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct PlanOptions {
    // Horizontal
    pub wall_length_mm: i64,
    pub module_widths: SizeSet,

    // Vertical
    pub total_height_mm: Option<i64>,
    pub plinth_mm: i64,
    pub top_mm: i64,
    pub vertical_heights: SizeSet,

    // Carcass
    pub depth_mm: u32,
    pub material_thickness_mm: u32,
    pub back_thickness_mm: u32,
    pub include_back: bool,
    pub assembly_mode: AssemblyMode,
    pub corner_allowance_mm: u32,

    // Reporting
    pub target_tolerance_mm: Option<u32>,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            wall_length_mm: 0,
            module_widths: SizeSet::default(),
            total_height_mm: None,
            plinth_mm: 0,
            top_mm: 0,
            vertical_heights: SizeSet::single(DEFAULT_ROW_HEIGHT_MM),
            depth_mm: DEFAULT_DEPTH_MM,
            material_thickness_mm: DEFAULT_MATERIAL_THICKNESS_MM,
            back_thickness_mm: 0,
            include_back: true,
            assembly_mode: AssemblyMode::Independent,
            corner_allowance_mm: 0,
            target_tolerance_mm: None,
        }
    }
}

impl PlanOptions {
    /// Options with the solid wood ranges for a given wall
    pub fn solid_wood_preset(wall_length_mm: i64) -> Self {
        Self {
            wall_length_mm,
            module_widths: SizeSet::new(SOLID_WOOD_MODULE_WIDTHS).unwrap_or_default(),
            vertical_heights: SizeSet::new(SOLID_WOOD_ROW_HEIGHTS).unwrap_or_default(),
            target_tolerance_mm: Some(SOLID_WOOD_TOLERANCE_MM),
            ..Default::default()
        }
    }

    /// Options with the standard module widths for a given wall
    pub fn standard_preset(wall_length_mm: i64) -> Self {
        Self::with_module_widths(wall_length_mm, STANDARD_MODULE_WIDTHS)
    }

    /// Options with the 300 mm module range for a given wall
    pub fn range_300_preset(wall_length_mm: i64) -> Self {
        Self::with_module_widths(wall_length_mm, RANGE_300_MODULE_WIDTHS)
    }

    fn with_module_widths(wall_length_mm: i64, widths: impl IntoIterator<Item = u32>) -> Self {
        Self {
            wall_length_mm,
            module_widths: SizeSet::new(widths).unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LayoutError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.wall_length_mm <= 0 {
            return Err(LayoutError::InvalidTarget(self.wall_length_mm));
        }

        if self.module_widths.is_empty() {
            return Err(LayoutError::EmptyDenominationSet);
        }

        if self.plinth_mm < 0 || self.top_mm < 0 {
            return Err(LayoutError::Config(
                "Plinth and top heights cannot be negative".to_string(),
            ));
        }

        if self.depth_mm == 0 || self.material_thickness_mm == 0 {
            return Err(LayoutError::Config(
                "Depth and material thickness must be positive".to_string(),
            ));
        }

        let allowance = self.corner_allowance_mm;
        let longest = self
            .module_widths
            .iter()
            .chain(self.vertical_heights.iter())
            .chain([self.depth_mm])
            .max()
            .unwrap_or(self.depth_mm);
        if longest.checked_add(allowance).is_none() {
            return Err(LayoutError::Config(format!(
                "Corner allowance of {} mm is too large",
                allowance
            )));
        }

        Ok(())
    }

    /// Height left for the stacked rows: total minus plinth minus top, at
    /// least 1 mm. Without a total height the body is one default row.
    pub fn body_height_target_mm(&self) -> i64 {
        match self.total_height_mm {
            Some(total) => (total - self.plinth_mm - self.top_mm).max(1),
            None => i64::from(DEFAULT_ROW_HEIGHT_MM),
        }
    }

    /// Carcass parameters for the cut list
    pub fn cut_list_params(&self) -> CutListParams {
        CutListParams {
            depth_mm: self.depth_mm,
            material_thickness_mm: self.material_thickness_mm,
            back_thickness_mm: self.back_thickness_mm,
            include_back: self.include_back,
            assembly_mode: self.assembly_mode,
            corner_allowance_mm: self.corner_allowance_mm,
        }
    }

    /// Tolerance the horizontal gap is judged against
    pub fn effective_tolerance_mm(&self) -> u32 {
        self.target_tolerance_mm.unwrap_or(GENERAL_TOLERANCE_MM)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    impl Serialize for AssemblyMode {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(match self {
                AssemblyMode::Independent => "independent",
                AssemblyMode::Shared => "shared",
            })
        }
    }

    impl<'de> Deserialize<'de> for AssemblyMode {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            match s.as_str() {
                "independent" => Ok(AssemblyMode::Independent),
                "shared" => Ok(AssemblyMode::Shared),
                _ => Err(serde::de::Error::unknown_variant(
                    &s,
                    &["independent", "shared"],
                )),
            }
        }
    }

    impl Serialize for PartKind {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.label())
        }
    }

    impl<'de> Deserialize<'de> for PartKind {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            PartKind::from_label(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("Unknown part: {}", s)))
        }
    }
} // end of serde_impls module
