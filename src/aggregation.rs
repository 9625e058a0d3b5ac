use polars::prelude::*;

use crate::error::ProjectionError;
use crate::schema;

/// Aggregate the projection dataset by week.
///
/// Groups rows by `Semana` and sums the four metric columns within each
/// group, returning one row per distinct week sorted ascending. Metrics are
/// cast to Float64 before summing so integer and float inputs produce the
/// same output dtype.
pub fn aggregate_weekly(df: &DataFrame) -> Result<DataFrame, ProjectionError> {
    let mut required = vec![schema::WEEK];
    required.extend(schema::METRICS);
    require_columns(df, &required)?;

    for name in schema::METRICS {
        let dtype = df.column(name)?.dtype();
        if !dtype.is_primitive_numeric() {
            return Err(ProjectionError::InvalidData(format!(
                "metric column '{}' must be numeric, found {}",
                name, dtype
            )));
        }
    }

    let sums: Vec<Expr> = schema::METRICS
        .iter()
        .map(|m| col(*m).cast(DataType::Float64).sum())
        .collect();

    let weekly = df
        .clone()
        .lazy()
        .group_by([col(schema::WEEK)])
        .agg(sums)
        .sort([schema::WEEK], SortMultipleOptions::default())
        .collect()?;

    Ok(weekly)
}

pub(crate) fn require_columns(
    df: &DataFrame,
    required: &[&str],
) -> Result<(), ProjectionError> {
    for &name in required {
        if df.column(name).is_err() {
            return Err(ProjectionError::MissingColumn(name.to_string()));
        }
    }
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_df() -> DataFrame {
        df!(
            schema::BRANCH => [1i64, 2, 1, 2],
            schema::SKU => ["A", "B", "A", "B"],
            schema::WEEK => [2i64, 1, 1, 2],
            schema::SALES => [8i64, 5, 10, 4],
            schema::TARGET => [9i64, 6, 12, 5],
            schema::REPLENISHMENT => [3i64, 1, 2, 2],
            schema::STOCK => [45i64, 20, 50, 30],
        )
        .expect("sample frame")
    }

    #[test]
    fn test_one_row_per_week_sorted_ascending() {
        let weekly = aggregate_weekly(&sample_df()).expect("aggregate");
        assert_eq!(weekly.height(), 2);

        let weeks: Vec<i64> = weekly
            .column(schema::WEEK)
            .expect("week column")
            .as_materialized_series()
            .i64()
            .expect("i64 weeks")
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(weeks, vec![1, 2]);
    }

    #[test]
    fn test_metric_sums_per_week() {
        let weekly = aggregate_weekly(&sample_df()).expect("aggregate");

        // Week 1: rows (5, 6, 1, 20) and (10, 12, 2, 50).
        // Week 2: rows (8, 9, 3, 45) and (4, 5, 2, 30).
        let expected: [(&str, [f64; 2]); 4] = [
            (schema::SALES, [15.0, 12.0]),
            (schema::TARGET, [18.0, 14.0]),
            (schema::REPLENISHMENT, [3.0, 5.0]),
            (schema::STOCK, [70.0, 75.0]),
        ];

        for (name, sums) in expected {
            let values: Vec<f64> = weekly
                .column(name)
                .expect("metric column")
                .as_materialized_series()
                .f64()
                .expect("f64 metric")
                .into_iter()
                .flatten()
                .collect();
            assert_eq!(values, sums.to_vec(), "sums for {}", name);
        }
    }

    #[test]
    fn test_sum_is_order_independent() {
        let df = sample_df();
        let reversed = df.reverse();

        let a = aggregate_weekly(&df).expect("aggregate");
        let b = aggregate_weekly(&reversed).expect("aggregate reversed");
        assert!(a.equals(&b), "aggregation must not depend on row order");
    }

    #[test]
    fn test_missing_metric_column() {
        let df = sample_df().drop(schema::STOCK).expect("drop column");
        let err = aggregate_weekly(&df).unwrap_err();
        match err {
            ProjectionError::MissingColumn(name) => assert_eq!(name, schema::STOCK),
            other => panic!("expected MissingColumn, got {other}"),
        }
    }

    #[test]
    fn test_missing_week_column() {
        let df = sample_df().drop(schema::WEEK).expect("drop column");
        let err = aggregate_weekly(&df).unwrap_err();
        assert!(matches!(err, ProjectionError::MissingColumn(_)));
    }

    #[test]
    fn test_non_numeric_metric_is_invalid_data() {
        let df = df!(
            schema::WEEK => [1i64, 2],
            schema::SALES => ["dez", "cinco"],
            schema::TARGET => [12i64, 6],
            schema::REPLENISHMENT => [2i64, 1],
            schema::STOCK => [50i64, 20],
        )
        .expect("frame");

        let err = aggregate_weekly(&df).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidData(_)));
    }
}
