use contracts::enums::Region;

use super::error::SelectionError;
use super::repository::Dataset;

/// Set of selected regions; duplicates are collapsed, order is not significant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    regions: Vec<Region>,
}

impl Selection {
    pub fn new(regions: impl IntoIterator<Item = Region>) -> Self {
        let mut unique: Vec<Region> = Vec::new();
        for region in regions {
            if !unique.contains(&region) {
                unique.push(region);
            }
        }
        Self { regions: unique }
    }

    /// Every region of the dataset (the multi-select default)
    pub fn all(dataset: &Dataset) -> Self {
        Self::new(dataset.regions())
    }

    /// Parse wire codes; the first unknown code fails the whole selection
    pub fn from_codes<S: AsRef<str>>(codes: &[S]) -> Result<Self, SelectionError> {
        let regions = codes
            .iter()
            .map(|code| {
                let code = code.as_ref();
                Region::from_code(code)
                    .ok_or_else(|| SelectionError::UnknownRegion(code.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(regions))
    }

    pub fn contains(&self, region: Region) -> bool {
        self.regions.contains(&region)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }
}
