//! CSV export tests.

use salesgen_core::{
    config::RunConfig,
    deal::Deal,
    export::{export_dataset, render_table},
    pipeline::SalesGenerator,
    table::Table,
};

#[test]
fn headers_are_snake_case_field_names() {
    let ds = SalesGenerator::new(RunConfig::default_test().generator).generate().unwrap();

    let deals = String::from_utf8(render_table(&ds.deals).unwrap()).unwrap();
    let header = deals.lines().next().unwrap();
    assert_eq!(
        header,
        "deal_id,date_id,client_id,product_id,revenue_byn,quantity,stage_name,is_first_deal"
    );
    assert_eq!(deals.lines().count(), ds.deals.len() + 1);

    let calendar = String::from_utf8(render_table(&ds.calendar).unwrap()).unwrap();
    let mut lines = calendar.lines();
    assert_eq!(lines.next(), Some("date_id,full_date,year,month_name,quarter"));
    assert_eq!(lines.next(), Some("20240101,2024-01-01,2024,Январь,1"));
}

#[test]
fn header_matches_column_metadata_for_every_table() {
    let ds = SalesGenerator::new(RunConfig::default_test().generator).generate().unwrap();

    fn check<T: Table>(rows: &[T]) {
        let csv = String::from_utf8(render_table(rows).unwrap()).unwrap();
        let header: Vec<&str> = csv.lines().next().unwrap().split(',').collect();
        let expected: Vec<&str> = T::COLUMNS.iter().map(|c| c.name).collect();
        assert_eq!(header, expected, "{}", T::qualified_name());
    }

    check(&ds.calendar);
    check(&ds.clients);
    check(&ds.products);
    check(&ds.deals);
    check(&ds.client_metrics);
    check(&ds.costs);
    check(&ds.plans);
}

#[test]
fn empty_table_still_has_header() {
    let empty: Vec<Deal> = Vec::new();
    let csv = String::from_utf8(render_table(&empty).unwrap()).unwrap();
    assert_eq!(
        csv.trim_end(),
        "deal_id,date_id,client_id,product_id,revenue_byn,quantity,stage_name,is_first_deal"
    );
}

#[test]
fn stage_names_are_written_in_russian() {
    let ds = SalesGenerator::new(RunConfig::default_test().generator).generate().unwrap();
    let csv = String::from_utf8(render_table(&ds.deals).unwrap()).unwrap();
    assert!(csv.contains("Сделка закрыта"));
    assert!(csv.contains("Лид"));
}

#[test]
fn export_writes_seven_named_files() {
    let ds = SalesGenerator::new(RunConfig::default_test().generator).generate().unwrap();
    let dir = std::env::temp_dir().join(format!("salesgen-export-{}", std::process::id()));

    let written = export_dataset(&ds, &dir).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        vec![
            "sales_d_calendar.csv",
            "sales_d_clients.csv",
            "sales_d_products.csv",
            "sales_f_deals.csv",
            "analytics_mart_client_metrics.csv",
            "marketing_costs.csv",
            "sales_d_plans.csv",
        ]
    );

    let on_disk = std::fs::read(dir.join("sales_f_deals.csv")).unwrap();
    assert_eq!(on_disk, render_table(&ds.deals).unwrap());

    std::fs::remove_dir_all(&dir).ok();
}
