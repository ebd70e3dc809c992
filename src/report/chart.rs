use std::collections::HashMap;

pub const MAX_BAR_WIDTH: usize = 40;
pub const MAX_CHART_ROWS: usize = 10;
const LABEL_WIDTH: usize = 20;
const BAR_GLYPH: char = '█';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartItem {
    pub label: String,
    pub count: u32,
}

impl ChartItem {
    pub fn new(label: impl Into<String>, count: u32) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Counts occurrences of each label, keeping labels in first-seen order.
pub fn count_frequencies<'a, I>(labels: I) -> Vec<ChartItem>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut items: Vec<ChartItem> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for label in labels {
        match index.get(label) {
            Some(&i) => items[i].count += 1,
            None => {
                index.insert(label, items.len());
                items.push(ChartItem::new(label, 1));
            }
        }
    }

    items
}

/// A rendered row of a bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub count: u32,
    pub bar_len: usize,
    pub percentage: f64,
}

/// Ranks items by count (descending, ties keep input order) and keeps the
/// top rows. Bars scale against the largest count; percentages are of the
/// total across all items, not just the rows kept.
pub fn chart_rows(items: &[ChartItem], max_width: usize) -> Vec<ChartRow> {
    let Some(max_count) = items.iter().map(|i| i.count).max() else {
        return Vec::new();
    };
    let total: u64 = items.iter().map(|i| i.count as u64).sum();

    let mut ranked: Vec<&ChartItem> = items.iter().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));

    ranked
        .into_iter()
        .take(MAX_CHART_ROWS)
        .map(|item| {
            let bar_len = if max_count == 0 {
                0
            } else {
                (item.count as f64 / max_count as f64 * max_width as f64).round() as usize
            };
            let percentage = if total == 0 {
                0.0
            } else {
                item.count as f64 / total as f64 * 100.0
            };
            ChartRow {
                label: item.label.clone(),
                count: item.count,
                bar_len,
                percentage,
            }
        })
        .collect()
}

pub fn render_bar_chart(items: &[ChartItem]) -> String {
    let mut chart = String::new();
    for row in chart_rows(items, MAX_BAR_WIDTH) {
        let bar: String = std::iter::repeat(BAR_GLYPH).take(row.bar_len).collect();
        chart.push_str(&format!(
            "{:<width$} {} {} ({:.1}%)\n",
            row.label,
            bar,
            row.count,
            row.percentage,
            width = LABEL_WIDTH
        ));
    }
    chart
}
