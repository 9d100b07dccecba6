use crate::test_helpers::factories::RowGroupFactory;

#[test]
fn creates_back_to_back_row_groups() {
    let row_groups = RowGroupFactory::new().with_start(100).create_list(3);

    let starts: Vec<u64> = row_groups.iter().map(|rg| rg.start_offset).collect();
    assert_eq!(starts, vec![100, 110, 120]);
    assert!(row_groups.iter().all(|rg| rg.total_byte_size == 10));
    assert!(row_groups.iter().all(|rg| rg.row_count == 2));
    assert_eq!(row_groups[0].columns[0].path, "foo");
    assert_eq!(row_groups[2].compressed_size(), 2);
}
