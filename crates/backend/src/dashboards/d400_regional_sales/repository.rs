use contracts::dashboards::d400_regional_sales::SalesRecord;
use contracts::enums::Region;

/// Inline sales data; the dashboard has no other source
const SALES_RECORDS: [SalesRecord; 5] = [
    SalesRecord::new(Region::North, 100.0, 5),
    SalesRecord::new(Region::South, 150.0, 8),
    SalesRecord::new(Region::North, 200.0, 10),
    SalesRecord::new(Region::South, 180.0, 7),
    SalesRecord::new(Region::East, 120.0, 6),
];

/// Immutable, ordered set of sales records
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<SalesRecord>,
}

impl Dataset {
    /// The built-in five-record dataset
    pub fn builtin() -> Self {
        Self::from_records(SALES_RECORDS.to_vec())
    }

    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Distinct regions in order of first appearance
    pub fn regions(&self) -> Vec<Region> {
        distinct_regions(&self.records)
    }
}

/// Distinct regions of `records` in order of first appearance
pub fn distinct_regions(records: &[SalesRecord]) -> Vec<Region> {
    let mut regions: Vec<Region> = Vec::new();
    for record in records {
        if !regions.contains(&record.region) {
            regions.push(record.region);
        }
    }
    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset() {
        let dataset = Dataset::builtin();
        assert_eq!(dataset.records().len(), 5);
        assert_eq!(
            dataset.records()[2],
            SalesRecord::new(Region::North, 200.0, 10)
        );
    }

    #[test]
    fn test_regions_in_first_appearance_order() {
        let dataset = Dataset::builtin();
        assert_eq!(
            dataset.regions(),
            vec![Region::North, Region::South, Region::East]
        );
    }

    #[test]
    fn test_regions_of_empty_dataset() {
        assert!(Dataset::from_records(Vec::new()).regions().is_empty());
    }
}
