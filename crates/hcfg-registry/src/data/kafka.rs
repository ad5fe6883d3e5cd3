use super::ComponentTable;
use crate::component::Component;
use crate::format::{ConfigFileSpec, ConfigFormat};
use crate::layout::ComponentLayout;
use crate::registry::{param, param_re, PatternStyle, SpecDef};

const FILES: &[ConfigFileSpec] = &[
    ConfigFileSpec::new("server.properties", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("producer.properties", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("consumer.properties", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("log4j.properties", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("connect-log4j.properties", ConfigFormat::PROPERTIES),
    ConfigFileSpec::new("tools-log4j.properties", ConfigFormat::PROPERTIES),
];

const PARAMS: &[SpecDef] = &[
    // server.properties
    param("broker.id", "server.properties"),
    param("listeners", "server.properties"),
    param("advertised.listeners", "server.properties"),
    param("log.dirs", "server.properties"),
    param("num.network.threads", "server.properties"),
    param("num.io.threads", "server.properties"),
    param("num.partitions", "server.properties"),
    param("default.replication.factor", "server.properties"),
    param("min.insync.replicas", "server.properties"),
    param("offsets.topic.replication.factor", "server.properties"),
    param("transaction.state.log.replication.factor", "server.properties"),
    param("socket.send.buffer.bytes", "server.properties"),
    param("socket.receive.buffer.bytes", "server.properties"),
    param("socket.request.max.bytes", "server.properties"),
    param("message.max.bytes", "server.properties"),
    param_re("log.retention.hours", r"^log[._-]retention[._-]hours?$", "server.properties"),
    param("log.retention.bytes", "server.properties"),
    param("log.segment.bytes", "server.properties"),
    param("log.retention.check.interval.ms", "server.properties"),
    param("zookeeper.connect", "server.properties"),
    param("zookeeper.connection.timeout.ms", "server.properties"),
    param("group.initial.rebalance.delay.ms", "server.properties"),
    param("auto.create.topics.enable", "server.properties"),
    param("delete.topic.enable", "server.properties"),
    param("unclean.leader.election.enable", "server.properties"),
    param("compression.type", "server.properties"),
    // producer.properties
    param("bootstrap.servers", "producer.properties"),
    param("compression.type", "producer.properties"),
    param("acks", "producer.properties"),
    param("batch.size", "producer.properties"),
    param("linger.ms", "producer.properties"),
    // consumer.properties
    param("bootstrap.servers", "consumer.properties"),
    param("group.id", "consumer.properties"),
    param("auto.offset.reset", "consumer.properties"),
    param("enable.auto.commit", "consumer.properties"),
    // log4j files
    param("log4j.rootLogger", "log4j.properties"),
    param("log4j.appender.kafkaAppender.File", "log4j.properties"),
    param("log4j.logger.kafka.controller", "log4j.properties"),
    param("log4j.rootLogger", "connect-log4j.properties"),
    param("log4j.rootLogger", "tools-log4j.properties"),
];

pub(super) const TABLE: ComponentTable = ComponentTable {
    component: Component::Kafka,
    style: PatternStyle::SeparatorClass,
    params: PARAMS,
    files: FILES,
    layout: ComponentLayout::new(
        "KAFKA_HOME",
        "config",
        &[
            "/etc/kafka/conf",
            "/etc/kafka",
            "/usr/lib/kafka/config",
            "/opt/kafka/config",
            "/usr/local/kafka/config",
        ],
    ),
};
