use super::*;
use crate::catalogue::ProjectRecord;

fn view(id: u64, weighting: usize) -> ProjectView {
    let record = ProjectRecord {
        id,
        permalink: format!("p{id}"),
        name: format!("project-{id}"),
        dependent_project_dependencies_ids: (0..weighting as u64).collect(),
        ..Default::default()
    };
    ProjectView::from_record(&record)
}

#[test]
fn test_sort_by_weighting_descending() {
    let mut views = vec![view(1, 0), view(2, 3), view(3, 1)];
    sort_by_weighting(&mut views);

    let ids: Vec<u64> = views.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn test_sort_by_weighting_keeps_ties_in_order() {
    let mut views = vec![view(5, 1), view(4, 2), view(3, 1), view(2, 2)];
    sort_by_weighting(&mut views);

    let ids: Vec<u64> = views.iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![4, 2, 5, 3]);
}
