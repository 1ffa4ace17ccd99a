use crate::domain::errors::ChartError;

/// An ordered set of named metric values for one comparison scenario.
///
/// Insertion order is the display order on the category axis.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    pub name: String,
    entries: Vec<(String, f64)>,
}

impl MetricSeries {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    /// Build a series from `(metric, value)` literals, keeping their order.
    pub fn from_pairs(name: &str, pairs: &[(&str, f64)]) -> Self {
        let mut series = Self::new(name);
        for (metric, value) in pairs {
            series.insert(metric, *value);
        }
        series
    }

    /// Insert a metric, or overwrite its value in place if already present.
    pub fn insert(&mut self, metric: &str, value: f64) {
        match self.entries.iter_mut().find(|(m, _)| m == metric) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((metric.to_string(), value)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(m, _)| m.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(m, v)| (m.as_str(), *v))
    }

    /// True when both series name the same metrics in the same order.
    pub fn is_aligned_with(&self, other: &MetricSeries) -> bool {
        self.metric_names().eq(other.metric_names())
    }

    /// Reject empty series and NaN/infinite values.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.is_empty() {
            return Err(ChartError::EmptySeries {
                series: self.name.clone(),
            });
        }
        if let Some((metric, value)) = self.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ChartError::NonFiniteValue {
                series: self.name.clone(),
                metric: metric.to_string(),
                value,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_preserves_order() {
        let series = MetricSeries::from_pairs("s", &[("b", 2.0), ("a", 1.0), ("c", 3.0)]);
        let names: Vec<&str> = series.metric_names().collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_insert_existing_metric_keeps_position() {
        let mut series = MetricSeries::from_pairs("s", &[("x", 1.0), ("y", 2.0)]);
        series.insert("x", 9.0);
        assert_eq!(series.len(), 2);
        assert_eq!(series.iter().next(), Some(("x", 9.0)));
    }

    #[test]
    fn test_alignment_is_order_sensitive() {
        let a = MetricSeries::from_pairs("a", &[("x", 1.0), ("y", 2.0)]);
        let b = MetricSeries::from_pairs("b", &[("y", 1.0), ("x", 2.0)]);
        let c = MetricSeries::from_pairs("c", &[("x", 5.0), ("y", 6.0)]);
        assert!(!a.is_aligned_with(&b));
        assert!(a.is_aligned_with(&c));
    }

    #[test]
    fn test_validate_rejects_empty_and_nan() {
        assert!(matches!(
            MetricSeries::new("empty").validate(),
            Err(ChartError::EmptySeries { .. })
        ));

        let bad = MetricSeries::from_pairs("bad", &[("x", 1.0), ("y", f64::NAN)]);
        match bad.validate() {
            Err(ChartError::NonFiniteValue { metric, .. }) => assert_eq!(metric, "y"),
            other => panic!("expected NonFiniteValue, got {:?}", other),
        }
    }
}
