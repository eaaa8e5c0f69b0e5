//! Statement filling through to result decoding against a single shared
//! configuration.
use std::sync::Arc;

use sharding_encrypt::ShardingEncryptorEngine;
use sharding_execute::{ColumnDescriptor, MemoryResultSetMetaData, QueryResultMetaData};
use sharding_parse::filler::SqlSegmentsFillerEngine;
use sharding_parse::metadata::{ColumnMetaData, ShardingTableMetaData, TableMetaData};
use sharding_parse::segment::{SqlSegment, TableSegment};
use sharding_parse::statement::SqlStatementKind;
use sharding_rule::{ShardingRule, ShardingRuleOracle};

const RULE: &str = r#"{
    "tables": [
        {"logic_table": "t_order", "actual_data_nodes": "ds_${0..1}.t_order_${0..1}"},
        {"logic_table": "t_order_item", "actual_data_nodes": "ds_${0..1}.t_order_item_${0..1}"}
    ],
    "binding_table_groups": ["t_order, t_order_item"],
    "broadcast_tables": ["t_config"]
}"#;

const ENCRYPT: &str = r#"{
    "tables": {
        "t_order": {"columns": ["status"], "assisted_query_columns": ["status_query"], "type": "MD5"}
    }
}"#;

fn table_meta() -> ShardingTableMetaData {
    let mut meta = ShardingTableMetaData::new();
    meta.insert(
        "t_order",
        TableMetaData::new([
            ColumnMetaData::new("order_id", "BIGINT", true),
            ColumnMetaData::new("status", "VARCHAR", false),
        ]),
    );
    meta
}

#[test]
fn select_join_then_decode() {
    logutil::init_test();

    let rule: Arc<dyn ShardingRuleOracle> =
        Arc::new(ShardingRule::from_json(RULE, ["ds_0", "ds_1"]).unwrap());
    let encryptor_engine = Arc::new(ShardingEncryptorEngine::from_json(ENCRYPT).unwrap());
    let filler_engine = SqlSegmentsFillerEngine::new(rule.clone(), Arc::new(table_meta()));

    // SELECT o.order_id, o.status, i.order_id FROM t_order o
    //   JOIN t_order_item i ON ... JOIN t_audit a ON ...
    let segments: Vec<SqlSegment> = vec![
        TableSegment::new("t_order", 50).with_alias("o").into(),
        TableSegment::new("t_order_item", 67).with_alias("i").into(),
        TableSegment::new("t_audit", 110).with_alias("a").into(),
    ];
    let statement = filler_engine
        .fill(&segments, SqlStatementKind::Select)
        .unwrap();
    assert_eq!(
        vec!["t_order", "t_order_item"],
        statement.tables().table_names()
    );
    assert_eq!(2, statement.tokens().len());

    // Result from shard ds_1.t_order_1 joined with t_order_item_1.
    let descriptor = Arc::new(MemoryResultSetMetaData::new([
        ColumnDescriptor::unaliased("order_id", "t_order_1"),
        ColumnDescriptor::unaliased("status", "t_order_1"),
        ColumnDescriptor::unaliased("order_id", "t_order_item_1"),
    ]));
    let meta = QueryResultMetaData::new(
        descriptor.clone(),
        Some(rule.clone()),
        encryptor_engine.clone(),
    )
    .unwrap();

    assert_eq!(3, meta.column_count());
    assert_eq!(1, meta.column_index("order_id").unwrap());
    assert_eq!("order_id", meta.column_label(3).unwrap());

    let encryptor = meta.sharding_encryptor(2).unwrap().unwrap();
    let cipher = encryptor.encrypt("paid").unwrap();
    assert_eq!(cipher, encryptor.decrypt(&cipher).unwrap());
    assert!(meta.sharding_encryptor(3).unwrap().is_none());
    assert_eq!(
        Some("status_query"),
        encryptor_engine.get_assisted_query_column("t_order", "status")
    );

    descriptor.close();
    meta.column_name(1).unwrap_err();
}

#[test]
fn update_unclassified_table() {
    let rule: Arc<dyn ShardingRuleOracle> =
        Arc::new(ShardingRule::from_json(RULE, ["ds_0", "ds_1"]).unwrap());
    let filler_engine = SqlSegmentsFillerEngine::new(rule, Arc::new(table_meta()));

    // UPDATE t_log SET ... WHERE id IN (SELECT id FROM t_audit)
    let segments: Vec<SqlSegment> = vec![
        TableSegment::new("t_log", 7).into(),
        TableSegment::new("t_audit", 52).into(),
    ];
    let statement = filler_engine
        .fill(&segments, SqlStatementKind::Update)
        .unwrap();
    assert_eq!(vec!["t_log"], statement.tables().table_names());
}

#[test]
fn single_data_source_registers_everything() {
    let rule: Arc<dyn ShardingRuleOracle> =
        Arc::new(ShardingRule::from_json("{}", ["ds"]).unwrap());
    let filler_engine = SqlSegmentsFillerEngine::new(rule, Arc::default());

    let segments: Vec<SqlSegment> = vec![
        TableSegment::new("t_a", 14).into(),
        TableSegment::new("t_b", 24).into(),
    ];
    let statement = filler_engine
        .fill(&segments, SqlStatementKind::Select)
        .unwrap();
    assert_eq!(vec!["t_a", "t_b"], statement.tables().table_names());
}
