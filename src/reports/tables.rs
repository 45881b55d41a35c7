use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use rateforge::catalog::{PricingUnit, RentalItem, ScenarioCategory};
use rateforge::compare::PriceDelta;
use rateforge::pricing::{PricePoint, PricingRow};

// Title and cell formatter of each printed table
const SECTIONS: [(&str, fn(&PricePoint) -> String); 3] = [
    ("VISUAL PRICES", |p| format!("{:.0}", p.visual)),
    ("RAW PRICES", |p| format!("{:.2}", p.raw)),
    ("SYSTEM UNIT PRICES (per day)", |p| format!("{:.4}", p.daily_system)),
];

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, from: usize, to: usize) {
    for i in from..=to {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn lift(rows: &[PricingRow]) {
    for (title, fmt) in SECTIONS {
        let mut table = new_table();
        table.add_row(vec![
            Cell::new("Days").add_attribute(Attribute::Bold),
            Cell::new("Disc %"),
            Cell::new("Adult").fg(Color::Cyan),
            Cell::new("Adult Promo").fg(Color::Green),
            Cell::new("Minor").fg(Color::Cyan),
            Cell::new("Minor Promo").fg(Color::Green),
        ]);
        align_right(&mut table, 0, 5);

        for row in rows.iter().filter_map(PricingRow::as_lift) {
            table.add_row(vec![
                Cell::new(row.days).add_attribute(Attribute::Bold),
                Cell::new(format!("{:.1}", row.coefficient)),
                Cell::new(fmt(&row.adult_regular)),
                Cell::new(fmt(&row.adult_promo)),
                Cell::new(fmt(&row.minor_regular)),
                Cell::new(fmt(&row.minor_promo)),
            ]);
        }
        println!("\n{}\n{}", title, table);
    }
}

pub fn rental(category: ScenarioCategory, rows: &[PricingRow], items: &[RentalItem]) {
    if items.is_empty() {
        println!("No rental items configured for {}.", category);
        return;
    }

    for (title, fmt) in SECTIONS {
        let mut table = new_table();
        let mut header = vec![
            Cell::new("Days").add_attribute(Attribute::Bold),
            Cell::new("Disc %"),
        ];
        for item in items {
            let unit = match item.pricing_unit {
                PricingUnit::Day => "",
                PricingUnit::Hour => " (h)",
            };
            header.push(Cell::new(format!("{}{}", item.label, unit)));
        }
        table.add_row(header);
        align_right(&mut table, 0, items.len() + 1);

        for row in rows.iter().filter_map(PricingRow::as_rental) {
            let mut cells = vec![
                Cell::new(row.days).add_attribute(Attribute::Bold),
                Cell::new(format!("{:.1}", row.coefficient)),
            ];
            for item in items {
                let text = row
                    .rental_items
                    .get(&item.id)
                    .map(fmt)
                    .unwrap_or_else(|| "-".to_string());
                cells.push(Cell::new(text));
            }
            table.add_row(cells);
        }
        println!("\n{} [{}]\n{}", title, category, table);
    }
}

pub fn comparison(deltas: &[PriceDelta]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Days").add_attribute(Attribute::Bold),
        Cell::new("Price"),
        Cell::new("Old"),
        Cell::new("New"),
        Cell::new("Δ %"),
    ]);
    align_right(&mut table, 2, 4);

    let fmt_opt = |v: Option<f64>| v.map(|x| format!("{:.0}", x)).unwrap_or_else(|| "-".into());

    for d in deltas {
        let pct_cell = match d.change_pct() {
            Some(p) if p > 0.0 => Cell::new(format!("+{:.1}%", p)).fg(Color::Red),
            Some(p) if p < 0.0 => Cell::new(format!("{:.1}%", p)).fg(Color::Green),
            Some(p) => Cell::new(format!("{:.1}%", p)),
            None => Cell::new("-"),
        };
        table.add_row(vec![
            Cell::new(d.days).add_attribute(Attribute::Bold),
            Cell::new(&d.label),
            Cell::new(fmt_opt(d.old)),
            Cell::new(fmt_opt(d.new)),
            pct_cell,
        ]);
    }
    println!("\n{}", table);
}

pub fn catalog(entries: &[(ScenarioCategory, &[RentalItem])]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Item"),
        Cell::new("Label"),
        Cell::new("Unit"),
    ]);

    for (category, items) in entries {
        if items.is_empty() {
            table.add_row(vec![
                Cell::new(category),
                Cell::new("-"),
                Cell::new("(priced from the adult base rate)"),
                Cell::new("-"),
            ]);
            continue;
        }
        for item in items.iter() {
            table.add_row(vec![
                Cell::new(category),
                Cell::new(&item.id),
                Cell::new(&item.label),
                Cell::new(item.pricing_unit),
            ]);
        }
    }
    println!("\n{}", table);
}
