//! Group totals for breakdown charts.

use std::collections::HashMap;

use epitrend_spi::GroupTotal;

/// Sum values per group, largest first, keeping at most `limit` groups.
///
/// Groups with equal totals keep the order in which they were first seen.
pub fn group_totals<I, S>(records: I, limit: usize) -> Vec<GroupTotal>
where
    I: IntoIterator<Item = (S, f64)>,
    S: AsRef<str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<GroupTotal> = Vec::new();

    for (group, value) in records {
        let group = group.as_ref();
        match index.get(group) {
            Some(&i) => totals[i].total += value,
            None => {
                index.insert(group.to_string(), totals.len());
                totals.push(GroupTotal {
                    group: group.to_string(),
                    total: value,
                });
            }
        }
    }

    totals.sort_by(|a, b| b.total.total_cmp(&a.total));
    totals.truncate(limit);
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_totals_sorted_desc() {
        let totals = group_totals(
            vec![("North", 5.0), ("South", 10.0), ("North", 7.0), ("East", 1.0)],
            10,
        );
        let groups: Vec<&str> = totals.iter().map(|g| g.group.as_str()).collect();
        assert_eq!(groups, vec!["North", "South", "East"]);
        assert_eq!(totals[0].total, 12.0);
    }

    #[test]
    fn test_group_totals_limit() {
        let totals = group_totals(vec![("a", 1.0), ("b", 2.0), ("c", 3.0)], 2);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].group, "c");
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let totals = group_totals(vec![("b", 1.0), ("a", 1.0)], 10);
        assert_eq!(totals[0].group, "b");
        assert_eq!(totals[1].group, "a");
    }

    #[test]
    fn test_empty() {
        assert!(group_totals(Vec::<(&str, f64)>::new(), 10).is_empty());
    }
}
