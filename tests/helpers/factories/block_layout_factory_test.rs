use crate::test_helpers::factories::BlockLayoutFactory;

#[test]
fn lays_out_contiguous_blocks_with_indexed_hosts() {
    let blocks = BlockLayoutFactory::new().with_block_sizes(&[49, 49, 49]).create();

    let ranges: Vec<(u64, u64)> = blocks.iter().map(|b| (b.offset, b.end())).collect();
    assert_eq!(ranges, vec![(0, 49), (49, 98), (98, 147)]);
    assert_eq!(blocks[1].hosts, vec!["foo1.datanode", "bar1.datanode"]);
}

#[test]
fn explicit_blocks_keep_their_offsets() {
    let blocks = BlockLayoutFactory::new()
        .with_block(0, 30)
        .with_block(60, 40)
        .create();

    assert_eq!(blocks[1].offset, 60);
    assert_eq!(blocks[1].hosts[0], "foo1.datanode");
}
