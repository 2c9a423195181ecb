use crate::data::model::{Factor, Measurement};

// ---------------------------------------------------------------------------
// Speedup calculation
// ---------------------------------------------------------------------------

/// The algorithm variants compared against the `StdSort` baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    MinMaxQuicksort,
    GnuParallelSort,
}

impl Variant {
    /// Both variants, in legend order.
    pub const ALL: [Variant; 2] = [Variant::MinMaxQuicksort, Variant::GnuParallelSort];

    pub fn label(&self) -> &'static str {
        match self {
            Variant::MinMaxQuicksort => "MinMaxQuicksort",
            Variant::GnuParallelSort => "GnuParallelSort",
        }
    }

    fn time_of(&self, m: &Measurement) -> f64 {
        match self {
            Variant::MinMaxQuicksort => m.min_max_quicksort,
            Variant::GnuParallelSort => m.gnu_parallel_sort,
        }
    }
}

/// Speedup of a variant over the baseline for one row: >1 means faster.
///
/// Plain IEEE division. A zero or missing timing produces infinity/NaN,
/// which is deliberately not treated as an error here; the renderer decides
/// what to do with non-finite points.
pub fn speedup(m: &Measurement, variant: Variant) -> f64 {
    m.std_sort / variant.time_of(m)
}

/// One `(x, speedup)` point per row, sorted ascending by x so a plotted
/// line never backtracks. Source row order carries no meaning.
pub fn speedup_points<'a, I>(rows: I, x_axis: Factor, variant: Variant) -> Vec<(f64, f64)>
where
    I: IntoIterator<Item = &'a Measurement>,
{
    let mut points: Vec<(f64, f64)> = rows
        .into_iter()
        .map(|m| (x_axis.value_of(m) as f64, speedup(m, variant)))
        .collect();
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    points
}

#[cfg(test)]
mod tests {
    use crate::data::filter::filtered_indices;
    use crate::data::model::BenchmarkDataset;

    use super::*;

    fn row(size: u64, threads: u64, std: f64, mmq: f64, gnu: f64) -> Measurement {
        Measurement {
            array_size: size,
            num_threads: threads,
            std_sort: std,
            min_max_quicksort: mmq,
            gnu_parallel_sort: gnu,
        }
    }

    #[test]
    fn speedup_is_baseline_over_variant() {
        let m = row(1000, 4, 2.0, 1.0, 0.5);
        assert_eq!(speedup(&m, Variant::MinMaxQuicksort), 2.0);
        assert_eq!(speedup(&m, Variant::GnuParallelSort), 4.0);
    }

    #[test]
    fn zero_variant_time_gives_infinity() {
        let m = row(1000, 4, 2.0, 0.0, 0.5);
        assert_eq!(speedup(&m, Variant::MinMaxQuicksort), f64::INFINITY);
    }

    #[test]
    fn points_are_sorted_by_x_regardless_of_row_order() {
        let rows = [
            row(1000, 8, 4.0, 2.0, 1.0),
            row(1000, 2, 1.0, 1.0, 0.5),
            row(1000, 4, 2.0, 1.0, 0.5),
        ];
        let points = speedup_points(rows.iter(), Factor::NumThreads, Variant::MinMaxQuicksort);
        assert_eq!(points, vec![(2.0, 1.0), (4.0, 2.0), (8.0, 2.0)]);
    }

    #[test]
    fn ratios_agree_between_whole_dataset_and_filtered_subset() {
        let ds = BenchmarkDataset::from_rows(vec![
            row(1000, 4, 2.0, 1.0, 0.5),
            row(1000, 12, 2.0, 0.4, 0.2),
            row(2000, 12, 5.0, 1.0, 0.5),
        ]);

        let whole = speedup_points(ds.rows.iter(), Factor::ArraySize, Variant::MinMaxQuicksort);

        let subset_rows: Vec<&Measurement> =
            filtered_indices(&ds, Factor::NumThreads, 12)
                .into_iter()
                .map(|i| &ds.rows[i])
                .collect();
        let subset = speedup_points(subset_rows, Factor::ArraySize, Variant::MinMaxQuicksort);

        // Every subset point appears with the same ratio in the whole-dataset
        // computation.
        for p in &subset {
            assert!(whole.contains(p), "missing point {p:?}");
        }
        assert_eq!(subset, vec![(1000.0, 5.0), (2000.0, 5.0)]);
    }
}
