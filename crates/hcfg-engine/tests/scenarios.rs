//! End-to-end requests against sandboxed install layouts

use anyhow::Result;
use hcfg_engine::{ConfigEngine, ConfigRequest, EngineConfig, Status};
use hcfg_mutate::MapEnv;
use hcfg_registry::Component;
use hcfg_test_utils::{changed_lines, property_count, property_values, Sandbox};
use pretty_assertions::assert_eq;
use std::fs;

fn engine(sandbox: &Sandbox) -> Result<ConfigEngine<MapEnv>> {
    let config = EngineConfig::new().with_search_root(sandbox.root());
    Ok(ConfigEngine::with_env(config, sandbox.env())?)
}

#[test]
fn replication_is_canonicalized_and_checked() -> Result<()> {
    let sandbox = Sandbox::new();
    let engine = engine(&sandbox)?;

    let found = engine
        .canonicalize(Component::Hdfs, "dfs.replication")
        .expect("registered");
    assert_eq!(found.canonical_name, "dfs.replication");
    assert_eq!(found.target_file, "hdfs-site.xml");

    assert!(engine.validate(Component::Hdfs, "dfs.replication", "3").is_ok());
    let report = engine.execute(&ConfigRequest::new(Component::Hdfs, "dfs.replication", "-1"));
    assert_eq!(report.status, Status::ConstraintViolated);
    assert_eq!(sandbox.entry_count(), 0);
    Ok(())
}

#[test]
fn missing_site_file_is_created_with_one_property() -> Result<()> {
    let sandbox = Sandbox::new();
    let engine = engine(&sandbox)?;

    let report = engine.execute(&ConfigRequest::new(Component::Hdfs, "dfs.namenode.name.dir", "/data/nn"));
    assert!(report.is_success(), "{report:?}");
    assert_eq!(report.path, Some(sandbox.default_dir(Component::Hdfs).join("hdfs-site.xml")));

    let xml = sandbox.read(Component::Hdfs, "hdfs-site.xml");
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains("<configuration>"));
    assert_eq!(property_count(&xml), 1);
    assert_eq!(property_values(&xml, "dfs.namenode.name.dir"), vec!["/data/nn"]);
    Ok(())
}

#[test]
fn second_update_replaces_value_in_place() -> Result<()> {
    let sandbox = Sandbox::new();
    let engine = engine(&sandbox)?;

    let first = engine.apply(&ConfigRequest::new(Component::Hdfs, "dfs.namenode.name.dir", "/data/nn"))?;
    assert!(first.created);
    let second = engine.apply(&ConfigRequest::new(Component::Hdfs, "dfs_namenode_name_dir", "/data/nn2"))?;
    assert!(!second.created);
    assert_eq!(first.path, second.path);

    let xml = sandbox.read(Component::Hdfs, "hdfs-site.xml");
    assert_eq!(property_count(&xml), 1);
    assert_eq!(property_values(&xml, "dfs.namenode.name.dir"), vec!["/data/nn2"]);
    Ok(())
}

#[test]
fn line_update_leaves_other_lines_untouched() -> Result<()> {
    let sandbox = Sandbox::new();
    let before = "\
# Kafka broker settings
broker.id=0
num.partitions=1

# retention
log.retention.hours=168
zookeeper.connect=localhost:2181
";
    let path = sandbox.write(Component::Kafka, "server.properties", before);
    let engine = engine(&sandbox)?;

    let report = engine.execute(&ConfigRequest::new(Component::Kafka, "num_partitions", "6"));
    assert!(report.is_success(), "{report:?}");
    assert_eq!(report.path.as_deref(), Some(path.as_path()));

    let after = fs::read_to_string(&path)?;
    assert_eq!(changed_lines(before, &after), vec![2]);
    assert!(after.contains("num.partitions=6\n"));
    Ok(())
}

#[test]
fn existing_site_file_keeps_other_properties() -> Result<()> {
    let sandbox = Sandbox::new();
    sandbox.write(
        Component::Hdfs,
        "core-site.xml",
        r#"<?xml version="1.0" encoding="UTF-8"?>
<?xml-stylesheet type="text/xsl" href="configuration.xsl"?>
<configuration>
  <property>
    <name>hadoop.tmp.dir</name>
    <value>/tmp/hadoop</value>
  </property>
</configuration>
"#,
    );
    let engine = engine(&sandbox)?;

    let report = engine.execute(&ConfigRequest::new(Component::Hdfs, "fs.default.name", "hdfs://nn1:8020"));
    assert!(report.is_success(), "{report:?}");

    let xml = sandbox.read(Component::Hdfs, "core-site.xml");
    assert!(xml.contains(r#"<?xml-stylesheet type="text/xsl" href="configuration.xsl"?>"#));
    assert_eq!(property_count(&xml), 2);
    assert_eq!(property_values(&xml, "hadoop.tmp.dir"), vec!["/tmp/hadoop"]);
    assert_eq!(property_values(&xml, "fs.defaultFS"), vec!["hdfs://nn1:8020"]);
    Ok(())
}

#[test]
fn applying_twice_is_byte_identical() -> Result<()> {
    let sandbox = Sandbox::new();
    let engine = engine(&sandbox)?;
    let request = ConfigRequest::new(Component::Hdfs, "dfs.replication", "2");

    engine.apply(&request)?;
    let once = sandbox.read(Component::Hdfs, "hdfs-site.xml");
    engine.apply(&request)?;
    let twice = sandbox.read(Component::Hdfs, "hdfs-site.xml");
    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn written_values_read_back() -> Result<()> {
    let sandbox = Sandbox::new();
    let engine = engine(&sandbox)?;

    engine.apply(&ConfigRequest::new(Component::Kafka, "log.retention.hours", "72"))?;
    engine.apply(&ConfigRequest::new(Component::Zookeeper, "tickTime", "2000"))?;

    assert_eq!(
        engine.read_value(Component::Kafka, "log.retention.hours", None)?.as_deref(),
        Some("72")
    );
    assert_eq!(
        engine.read_value(Component::Zookeeper, "tickTime", None)?.as_deref(),
        Some("2000")
    );
    assert_eq!(engine.read_value(Component::Kafka, "num.partitions", None)?, None);
    Ok(())
}

#[test]
fn home_variable_wins_over_default_dirs() -> Result<()> {
    let sandbox = Sandbox::new().with_home(Component::Kafka, "kafka");
    let engine = engine(&sandbox)?;

    let change = engine.apply(&ConfigRequest::new(Component::Kafka, "num.partitions", "3"))?;
    assert_eq!(change.path, sandbox.root().join("kafka/config/server.properties"));
    assert!(!sandbox.default_dir(Component::Kafka).exists());
    Ok(())
}

#[test]
fn creation_can_be_disabled() -> Result<()> {
    let sandbox = Sandbox::new();
    let config = EngineConfig::new()
        .with_search_root(sandbox.root())
        .with_create_missing(false);
    let engine = ConfigEngine::with_env(config, sandbox.env())?;

    let report = engine.execute(&ConfigRequest::new(Component::Hdfs, "dfs.replication", "3"));
    assert_eq!(report.status, Status::FileNotFound);
    assert_eq!(sandbox.entry_count(), 0);
    Ok(())
}

#[test]
fn uncreatable_config_directory_is_file_not_found() -> Result<()> {
    let sandbox = Sandbox::new();
    fs::write(sandbox.root().join("etc"), "")?;
    let engine = engine(&sandbox)?;

    let report = engine.execute(&ConfigRequest::new(Component::Hdfs, "dfs.replication", "3"));
    assert_eq!(report.status, Status::FileNotFound);
    assert_eq!(
        report.path,
        Some(sandbox.root().join("etc/hadoop/conf/hdfs-site.xml"))
    );
    Ok(())
}

#[test]
fn latin1_properties_file_is_updated_in_place() -> Result<()> {
    let sandbox = Sandbox::new();
    let dir = sandbox.default_dir(Component::Kafka);
    fs::create_dir_all(&dir)?;
    let path = dir.join("server.properties");
    fs::write(&path, b"# Kafka f\xfcr Entwickler\nbroker.id=0\nnum.partitions=1\n")?;
    let engine = engine(&sandbox)?;

    let report = engine.execute(&ConfigRequest::new(Component::Kafka, "num.partitions", "4"));
    assert!(report.is_success(), "{report:?}");
    assert_eq!(
        fs::read(&path)?,
        b"# Kafka f\xfcr Entwickler\nbroker.id=0\nnum.partitions=4\n".to_vec()
    );
    Ok(())
}

#[test]
fn foreign_root_element_is_rejected() -> Result<()> {
    let sandbox = Sandbox::new();
    let original = "<?xml version=\"1.0\"?>\n<settings><a>1</a></settings>\n";
    let path = sandbox.write(Component::Hdfs, "hdfs-site.xml", original);
    let engine = engine(&sandbox)?;

    let report = engine.execute(&ConfigRequest::new(Component::Hdfs, "dfs.replication", "3"));
    assert_eq!(report.status, Status::XmlInvalidRoot);
    assert_eq!(fs::read_to_string(path)?, original);
    Ok(())
}

#[test]
fn malformed_xml_is_a_parse_error() -> Result<()> {
    let sandbox = Sandbox::new();
    sandbox.write(Component::Hdfs, "hdfs-site.xml", "<configuration><property>");
    let engine = engine(&sandbox)?;

    let report = engine.execute(&ConfigRequest::new(Component::Hdfs, "dfs.replication", "3"));
    assert_eq!(report.status, Status::XmlParseError);
    Ok(())
}

#[test]
fn dispatcher_report_serializes() -> Result<()> {
    let sandbox = Sandbox::new();
    let engine = engine(&sandbox)?;

    let report = engine.apply_raw("hdfs", "dfs-replication", "3", None);
    let json: serde_json::Value = serde_json::from_str(&report.to_json()?)?;
    assert_eq!(json["status"], "SUCCESS");
    assert_eq!(json["code"], 0);
    assert_eq!(json["param"]["canonicalName"], "dfs.replication");
    assert_eq!(json["param"]["configFile"], "hdfs-site.xml");
    Ok(())
}
