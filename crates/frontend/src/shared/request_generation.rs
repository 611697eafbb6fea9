//! Latest-wins guard for overlapping fetches

/// Numbers outgoing requests; only the most recently issued one is current
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    /// Registers a new request and returns its id; every earlier id becomes stale
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, id: u64) -> bool {
        id == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let mut generation = RequestGeneration::default();
        assert_eq!(generation.issue(), 1);
        assert_eq!(generation.issue(), 2);
    }

    #[test]
    fn test_out_of_order_responses_apply_latest_only() {
        let mut generation = RequestGeneration::default();
        let north = generation.issue();
        let north_east = generation.issue();

        // responses arrive newest first
        let mut applied = Vec::new();
        for (id, payload) in [(north_east, "North,East"), (north, "North")] {
            if generation.is_current(id) {
                applied.push(payload);
            }
        }
        assert_eq!(applied, vec!["North,East"]);
    }

    #[test]
    fn test_response_after_newer_request_is_stale() {
        let mut generation = RequestGeneration::default();
        let first = generation.issue();
        assert!(generation.is_current(first));

        let second = generation.issue();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }
}
