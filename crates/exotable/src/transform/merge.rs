//! Joining two unified tables and reconciling their column ledgers.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::join::{JoinHow, JoinKeys, MergeSpec};
use crate::error::{ExoError, Result};
use crate::exotable::ExoTable;
use crate::input::DataTable;
use crate::schema::{ColumnInfo, ColumnInfoEntry};

/// Where an output column takes its values from.
#[derive(Debug, Clone, Copy)]
enum Origin {
    Left(usize),
    Right(usize),
    /// Key column shared by both sides, coalesced left then right.
    Key { left: usize, right: usize },
}

/// Resolved key column positions.
struct KeyPlan {
    left: Vec<usize>,
    right: Vec<usize>,
}

/// Merge `right` into `left`, returning a new table.
///
/// Rows are combined with a hash join on the key columns: left rows keep
/// their order (followed by their matching right rows in right order), then
/// unmatched right rows are appended. Cells of the side without a match are
/// left empty. Null keys never match. Columns present on both sides that are
/// not shared keys are kept twice with the configured suffixes; no attempt is
/// made to collapse them, even when their units agree.
pub fn merge_tables(left: &ExoTable, right: &ExoTable, spec: &MergeSpec) -> Result<ExoTable> {
    if let Some(source) = right
        .sources()
        .iter()
        .find(|s| left.sources().contains(*s))
    {
        return Err(ExoError::AlreadyMerged(source.clone()));
    }

    let (ldata, rdata) = (left.data(), right.data());
    let keys = spec.resolved_keys();
    let plan = resolve_keys(&keys, ldata, rdata)?;
    let origins = plan_columns(ldata, rdata, &plan);
    let headers = output_headers(ldata, rdata, &origins, &spec.suffixes)?;

    let pairs = match keys {
        JoinKeys::Index => pair_by_index(ldata.row_count(), rdata.row_count(), spec.how),
        _ => pair_by_key(ldata, rdata, &plan, spec.how),
    };

    let rows: Vec<Vec<String>> = pairs
        .iter()
        .map(|&(l, r)| build_row(ldata, rdata, &origins, l, r))
        .collect();

    debug!(
        left_rows = ldata.row_count(),
        right_rows = rdata.row_count(),
        merged_rows = rows.len(),
        how = %spec.how,
        "Merged tables"
    );

    let column_info = reconcile_column_info(left, right, &origins, &headers)?;

    let mut sources = left.sources().to_vec();
    sources.extend(right.sources().iter().cloned());

    Ok(ExoTable::from_parts(
        DataTable::new(headers, rows),
        column_info,
        sources,
    ))
}

fn resolve_keys(keys: &JoinKeys, left: &DataTable, right: &DataTable) -> Result<KeyPlan> {
    let (left_names, right_names): (Vec<&str>, Vec<&str>) = match keys {
        JoinKeys::On(columns) => {
            if columns.is_empty() {
                return Err(ExoError::Config("Join needs at least one key column".to_string()));
            }
            columns.iter().map(|c| (c.as_str(), c.as_str())).unzip()
        }
        JoinKeys::LeftRight { left, right } => {
            if left.len() != right.len() || left.is_empty() {
                return Err(ExoError::Config(format!(
                    "Join needs the same number of left and right keys (got {} and {})",
                    left.len(),
                    right.len()
                )));
            }
            (
                left.iter().map(|c| c.as_str()).collect(),
                right.iter().map(|c| c.as_str()).collect(),
            )
        }
        JoinKeys::Index => (Vec::new(), Vec::new()),
    };

    let locate = |table: &DataTable, name: &str, side: &'static str| {
        table.column_index(name).ok_or_else(|| ExoError::MissingJoinKey {
            column: name.to_string(),
            side,
        })
    };

    Ok(KeyPlan {
        left: left_names
            .iter()
            .map(|n| locate(left, *n, "left"))
            .collect::<Result<Vec<_>>>()?,
        right: right_names
            .iter()
            .map(|n| locate(right, *n, "right"))
            .collect::<Result<Vec<_>>>()?,
    })
}

fn plan_columns(left: &DataTable, right: &DataTable, plan: &KeyPlan) -> Vec<Origin> {
    // Keys with the same name on both sides collapse into one column
    let shared: HashMap<usize, usize> = plan
        .left
        .iter()
        .zip(&plan.right)
        .filter(|&(&l, &r)| left.headers[l] == right.headers[r])
        .map(|(&l, &r)| (l, r))
        .collect();

    let mut origins: Vec<Origin> = (0..left.column_count())
        .map(|l| match shared.get(&l) {
            Some(&r) => Origin::Key { left: l, right: r },
            None => Origin::Left(l),
        })
        .collect();

    origins.extend(
        (0..right.column_count())
            .filter(|r| !shared.values().any(|s| s == r))
            .map(Origin::Right),
    );

    origins
}

fn output_headers(
    left: &DataTable,
    right: &DataTable,
    origins: &[Origin],
    suffixes: &(String, String),
) -> Result<Vec<String>> {
    let left_plain: Vec<&str> = origins
        .iter()
        .filter_map(|o| match o {
            Origin::Left(i) => Some(left.headers[*i].as_str()),
            _ => None,
        })
        .collect();
    let right_plain: Vec<&str> = origins
        .iter()
        .filter_map(|o| match o {
            Origin::Right(i) => Some(right.headers[*i].as_str()),
            _ => None,
        })
        .collect();

    let mut headers: Vec<String> = Vec::with_capacity(origins.len());
    for origin in origins {
        let name = match *origin {
            Origin::Key { left: l, .. } => left.headers[l].clone(),
            Origin::Left(l) => {
                let name = &left.headers[l];
                if right_plain.contains(&name.as_str()) {
                    format!("{}{}", name, suffixes.0)
                } else {
                    name.clone()
                }
            }
            Origin::Right(r) => {
                let name = &right.headers[r];
                if left_plain.contains(&name.as_str()) {
                    format!("{}{}", name, suffixes.1)
                } else {
                    name.clone()
                }
            }
        };
        if headers.contains(&name) {
            return Err(ExoError::SuffixCollision(name));
        }
        headers.push(name);
    }

    Ok(headers)
}

fn row_key<'a>(table: &'a DataTable, row: usize, keys: &[usize]) -> Option<Vec<&'a str>> {
    keys.iter()
        .map(|&k| {
            let value = table.get(row, k).unwrap_or("");
            (!DataTable::is_null_value(value)).then_some(value)
        })
        .collect()
}

fn pair_by_key(
    left: &DataTable,
    right: &DataTable,
    plan: &KeyPlan,
    how: JoinHow,
) -> Vec<(Option<usize>, Option<usize>)> {
    let mut index: HashMap<Vec<&str>, Vec<usize>> = HashMap::new();
    for r in 0..right.row_count() {
        if let Some(key) = row_key(right, r, &plan.right) {
            index.entry(key).or_default().push(r);
        }
    }

    let mut matched_right = vec![false; right.row_count()];
    let mut pairs = Vec::new();

    for l in 0..left.row_count() {
        let matches = row_key(left, l, &plan.left).and_then(|key| index.get(&key));
        match matches {
            Some(rows) => {
                for &r in rows {
                    matched_right[r] = true;
                    pairs.push((Some(l), Some(r)));
                }
            }
            None if how.keeps_left() => pairs.push((Some(l), None)),
            None => {}
        }
    }

    if how.keeps_right() {
        pairs.extend(
            matched_right
                .iter()
                .enumerate()
                .filter(|(_, matched)| !**matched)
                .map(|(r, _)| (None, Some(r))),
        );
    }

    pairs
}

fn pair_by_index(left_rows: usize, right_rows: usize, how: JoinHow) -> Vec<(Option<usize>, Option<usize>)> {
    let len = match how {
        JoinHow::Inner => left_rows.min(right_rows),
        JoinHow::Left => left_rows,
        JoinHow::Right => right_rows,
        JoinHow::Outer => left_rows.max(right_rows),
    };
    (0..len)
        .map(|i| ((i < left_rows).then_some(i), (i < right_rows).then_some(i)))
        .collect()
}

fn build_row(
    left: &DataTable,
    right: &DataTable,
    origins: &[Origin],
    l: Option<usize>,
    r: Option<usize>,
) -> Vec<String> {
    let cell = |table: &DataTable, row: Option<usize>, col: usize| {
        row.and_then(|row| table.get(row, col)).unwrap_or("").to_string()
    };

    origins
        .iter()
        .map(|origin| match *origin {
            Origin::Left(c) => cell(left, l, c),
            Origin::Right(c) => cell(right, r, c),
            Origin::Key { left: lc, right: rc } => match l {
                Some(_) => cell(left, l, lc),
                None => cell(right, r, rc),
            },
        })
        .collect()
}

fn reconcile_column_info(
    left: &ExoTable,
    right: &ExoTable,
    origins: &[Origin],
    headers: &[String],
) -> Result<ColumnInfo> {
    let entry_for = |table: &ExoTable, col: usize| {
        let name = &table.data().headers[col];
        table
            .column_info()
            .get(name)
            .cloned()
            .unwrap_or_else(|| ColumnInfoEntry::unknown(name.clone(), ""))
    };

    let mut info = ColumnInfo::new();
    for (origin, header) in origins.iter().zip(headers) {
        let mut entry = match *origin {
            Origin::Left(c) => entry_for(left, c),
            Origin::Right(c) => entry_for(right, c),
            Origin::Key { left: lc, right: rc } => {
                let kept = entry_for(left, lc);
                let other = entry_for(right, rc);
                if !kept.same_provenance(&other) {
                    warn!(
                        column = %header,
                        left_unit = %kept.unit,
                        right_unit = %other.unit,
                        "Join key provenance differs between tables; keeping the left entry"
                    );
                }
                kept
            }
        };
        entry.column = header.clone();
        info.register(entry)?;
    }

    Ok(info)
}
