//! Runs of attributes that can be reordered safely

use crate::tree::Attribute;

/// Split an attribute list into maximal runs of plain attributes
///
/// A spread attribute closes the current run and belongs to none. Moving a
/// plain attribute across a spread can change which value wins at runtime,
/// so runs are the only unit the fixer reorders.
pub(crate) fn sortable_groups(attributes: &[Attribute]) -> Vec<Vec<&Attribute>> {
    let mut groups: Vec<Vec<&Attribute>> = Vec::new();
    let mut previous: Option<&Attribute> = None;

    for attribute in attributes {
        if !attribute.is_spread() {
            let starts_group = previous.is_none_or(|prev| prev.is_spread());
            match groups.last_mut() {
                Some(group) if !starts_group => group.push(attribute),
                _ => groups.push(vec![attribute]),
            }
        }
        previous = Some(attribute);
    }

    groups
}

/// Move every attribute named `first` to the front of the run
///
/// The sort is stable: all other attributes compare equal and keep their
/// relative order.
pub(crate) fn sort_group<'a>(group: &[&'a Attribute], first: &str) -> Vec<&'a Attribute> {
    let mut sorted = group.to_vec();
    sorted.sort_by_key(|attribute| !attribute.is(first));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Span;

    fn plain(name: &str, at: usize) -> Attribute {
        Attribute::plain(name, Span::new(at, at + 1))
    }

    fn spread(at: usize) -> Attribute {
        Attribute::spread(Span::new(at, at + 1))
    }

    fn names(group: &[&Attribute]) -> Vec<String> {
        group
            .iter()
            .map(|a| a.name().unwrap_or("?").to_string())
            .collect()
    }

    #[test]
    fn test_empty_list_has_no_groups() {
        assert!(sortable_groups(&[]).is_empty());
    }

    #[test]
    fn test_only_spreads_has_no_groups() {
        let attributes = vec![spread(0), spread(2), spread(4)];
        assert!(sortable_groups(&attributes).is_empty());
    }

    #[test]
    fn test_no_spread_is_one_group() {
        let attributes = vec![plain("b", 0), plain("templateName", 2), plain("a", 4)];
        let groups = sortable_groups(&attributes);
        assert_eq!(groups.len(), 1);
        assert_eq!(names(&groups[0]), vec!["b", "templateName", "a"]);
    }

    #[test]
    fn test_spreads_split_groups() {
        let attributes = vec![
            spread(0),
            plain("a", 2),
            plain("b", 4),
            spread(6),
            spread(8),
            plain("c", 10),
            spread(12),
        ];
        let groups = sortable_groups(&attributes);
        assert_eq!(groups.len(), 2);
        assert_eq!(names(&groups[0]), vec!["a", "b"]);
        assert_eq!(names(&groups[1]), vec!["c"]);
    }

    #[test]
    fn test_groups_plus_spreads_reconstruct_list() {
        let attributes = vec![
            plain("a", 0),
            spread(2),
            plain("b", 4),
            plain("c", 6),
            spread(8),
        ];
        let groups = sortable_groups(&attributes);

        let plains: Vec<&Attribute> = groups.into_iter().flatten().collect();
        let expected: Vec<&Attribute> = attributes.iter().filter(|a| !a.is_spread()).collect();
        assert_eq!(plains, expected);
    }

    #[test]
    fn test_sort_moves_first_to_front() {
        let attributes = vec![plain("b", 0), plain("templateName", 2), plain("a", 4)];
        let group: Vec<&Attribute> = attributes.iter().collect();

        let sorted = sort_group(&group, "templateName");
        assert_eq!(names(&sorted), vec!["templateName", "b", "a"]);
    }

    #[test]
    fn test_sort_is_not_alphabetical() {
        let attributes = vec![plain("z", 0), plain("m", 2), plain("a", 4)];
        let group: Vec<&Attribute> = attributes.iter().collect();

        let sorted = sort_group(&group, "templateName");
        assert_eq!(names(&sorted), vec!["z", "m", "a"]);
    }

    #[test]
    fn test_sort_is_stable_for_duplicates() {
        let attributes = vec![
            plain("x", 0),
            plain("templateName", 2),
            plain("y", 4),
            plain("templateName", 6),
        ];
        let group: Vec<&Attribute> = attributes.iter().collect();

        let sorted = sort_group(&group, "templateName");
        assert!(std::ptr::eq(sorted[0], &attributes[1]));
        assert!(std::ptr::eq(sorted[1], &attributes[3]));
        assert_eq!(names(&sorted[2..]), vec!["x", "y"]);
    }

    #[test]
    fn test_sort_keeps_nameless_attributes() {
        let attributes = vec![
            Attribute {
                name: None,
                ..plain("", 0)
            },
            plain("templateName", 2),
        ];
        let group: Vec<&Attribute> = attributes.iter().collect();

        let sorted = sort_group(&group, "templateName");
        assert!(std::ptr::eq(sorted[0], &attributes[1]));
        assert!(std::ptr::eq(sorted[1], &attributes[0]));
    }
}
