use crate::{QueryResponse, ResponseData};

/// Merges consecutive response pages of one query into a single response.
///
/// Records are concatenated per entity kind in arrival order. Pages are range disjoint so
/// nothing is deduplicated.
#[derive(Debug, Clone)]
pub struct Assembler {
    data: ResponseData,
    archive_height: Option<u64>,
    next_block: u64,
    total_execution_time: u64,
    num_pages: usize,
}

impl Assembler {
    /// Starts an empty response at `from_block`.
    pub fn new(from_block: u64) -> Self {
        Self {
            data: ResponseData::default(),
            archive_height: None,
            next_block: from_block,
            total_execution_time: 0,
            num_pages: 0,
        }
    }

    /// Appends the next page.
    pub fn push(&mut self, page: QueryResponse) {
        self.data.extend(page.data);
        self.archive_height = page.archive_height;
        self.next_block = page.next_block;
        self.total_execution_time = self
            .total_execution_time
            .saturating_add(page.total_execution_time);
        self.num_pages += 1;
    }

    /// Number of pages pushed so far.
    pub fn num_pages(&self) -> usize {
        self.num_pages
    }

    /// The assembled response. `archive_height` and `next_block` come from the last page.
    pub fn finish(self) -> QueryResponse {
        QueryResponse {
            archive_height: self.archive_height,
            next_block: self.next_block,
            total_execution_time: self.total_execution_time,
            data: self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Record;
    use serde_json::json;

    fn page(next_block: u64, archive_height: u64, amounts: &[u64]) -> QueryResponse {
        QueryResponse {
            archive_height: Some(archive_height),
            next_block,
            total_execution_time: 5,
            data: ResponseData {
                inputs: amounts
                    .iter()
                    .map(|a| serde_json::from_value::<Record>(json!({ "amount": a })).unwrap())
                    .collect(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_no_pages() {
        let res = Assembler::new(7).finish();
        assert_eq!(res.next_block, 7);
        assert_eq!(res.archive_height, None);
        assert!(res.data.is_empty());
    }

    #[test]
    fn test_concatenates_in_order() {
        let mut assembler = Assembler::new(0);
        assembler.push(page(50, 90, &[1, 2]));
        assembler.push(page(100, 120, &[3]));
        assert_eq!(assembler.num_pages(), 2);

        let res = assembler.finish();
        assert_eq!(res.next_block, 100);
        assert_eq!(res.archive_height, Some(120));
        assert_eq!(res.total_execution_time, 10);

        let amounts = res
            .data
            .inputs
            .iter()
            .filter_map(|r| r.get("amount").and_then(|v| v.as_u64()))
            .collect::<Vec<_>>();
        assert_eq!(amounts, vec![1, 2, 3]);
    }

    #[test]
    fn test_execution_time_saturates() {
        let mut assembler = Assembler::new(0);
        assembler.push(QueryResponse {
            total_execution_time: u64::MAX - 1,
            ..page(50, 90, &[])
        });
        assembler.push(page(100, 90, &[]));

        assert_eq!(assembler.finish().total_execution_time, u64::MAX);
    }
}
