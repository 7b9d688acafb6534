/// Well-known ports offered by the custom checker's port selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommonPort {
    pub port: u16,
    pub label: &'static str,
}

pub const COMMON_PORTS: &[CommonPort] = &[
    CommonPort { port: 22, label: "SSH" },
    CommonPort { port: 25, label: "SMTP" },
    CommonPort { port: 53, label: "DNS" },
    CommonPort { port: 80, label: "HTTP" },
    CommonPort { port: 443, label: "HTTPS" },
    CommonPort { port: 3306, label: "MySQL" },
    CommonPort { port: 5432, label: "PostgreSQL" },
    CommonPort { port: 6379, label: "Redis" },
    CommonPort { port: 8080, label: "HTTP Alt" },
    CommonPort { port: 9200, label: "Elasticsearch" },
    CommonPort { port: 27017, label: "MongoDB" },
];
