pub const PAPER_TITLE: &str = "AgentFlux: A Framework for Privacy-Preserving On-Device Agentic Systems";
pub const ARXIV_ID: &str = "2510.00229";

pub const BIBTEX: &str = r#"@article{agentflux2024,
  title={AgentFlux: A Framework for Privacy-Preserving On-Device Agentic Systems},
  author={[Authors to be added]},
  journal={arXiv preprint arXiv:2510.00229},
  year={2024}
}"#;
