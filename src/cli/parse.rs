use wayfind_core::format::OutputFormat;
use wayfind_core::NodeId;

/// Parse a node id from a command-line argument
pub fn parse_node(s: &str) -> std::result::Result<NodeId, String> {
    s.parse::<NodeId>()
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
