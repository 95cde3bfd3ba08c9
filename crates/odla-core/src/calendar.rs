use crate::models::CalendarTask;
use crate::month::Month;
use std::collections::BTreeMap;

/// Heading used for tasks that do not belong to a plant.
pub const CUSTOM_GROUP_LABEL: &str = "ANPASSAD UPPGIFT";

/// Calendar tasks partitioned by month. Every month is present, possibly
/// empty, and tasks keep their aggregation order inside a bucket.
#[derive(Debug, Clone, Default)]
pub struct MonthlyGroups {
    buckets: BTreeMap<Month, Vec<CalendarTask>>,
}

pub fn group_by_month(tasks: impl IntoIterator<Item = CalendarTask>) -> MonthlyGroups {
    let mut buckets: BTreeMap<Month, Vec<CalendarTask>> =
        Month::ALL.into_iter().map(|m| (m, Vec::new())).collect();

    for task in tasks {
        buckets.entry(task.month).or_default().push(task);
    }

    MonthlyGroups { buckets }
}

impl MonthlyGroups {
    pub fn month(&self, month: Month) -> &[CalendarTask] {
        self.buckets.get(&month).map(Vec::as_slice).unwrap_or_default()
    }

    /// Months in calendar order with their tasks.
    pub fn iter(&self) -> impl Iterator<Item = (Month, &[CalendarTask])> {
        self.buckets.iter().map(|(m, tasks)| (*m, tasks.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tasks of one month grouped under their uppercased plant name, in order
    /// of first appearance. Custom tasks share [`CUSTOM_GROUP_LABEL`].
    pub fn by_plant(&self, month: Month) -> Vec<(String, Vec<&CalendarTask>)> {
        group_by_plant(self.month(month))
    }
}

impl IntoIterator for MonthlyGroups {
    type Item = (Month, Vec<CalendarTask>);
    type IntoIter = std::collections::btree_map::IntoIter<Month, Vec<CalendarTask>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

pub fn group_by_plant(tasks: &[CalendarTask]) -> Vec<(String, Vec<&CalendarTask>)> {
    let mut groups: Vec<(String, Vec<&CalendarTask>)> = Vec::new();

    for task in tasks {
        let label = task
            .plant_name()
            .map(str::to_uppercase)
            .unwrap_or_else(|| CUSTOM_GROUP_LABEL.to_string());

        match groups.iter_mut().find(|(name, _)| *name == label) {
            Some((_, members)) => members.push(task),
            None => groups.push((label, vec![task])),
        }
    }

    groups
}
