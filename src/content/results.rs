/// Yes / No / not applicable table cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    Yes,
    No,
    NotApplicable,
}

impl Flag {
    pub fn label(self) -> &'static str {
        match self {
            Flag::Yes => "Yes",
            Flag::No => "No",
            Flag::NotApplicable => "-",
        }
    }
}

/// MCP-Bench filesystem accuracy of off-the-shelf models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaselineRow {
    pub model: &'static str,
    pub tool_fit: f64,
    pub reasoning: Flag,
    pub frontier: Flag,
}

impl BaselineRow {
    pub const HEADERS: [&'static str; 4] = ["Model", "ToolFit (%)", "Reasoning", "Frontier"];

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.model.to_string(),
            format!("{:.1}", self.tool_fit),
            self.reasoning.label().to_string(),
            self.frontier.label().to_string()
        ]
    }

    /// The frontier reference is called out in the table.
    pub fn highlighted(&self) -> bool {
        self.frontier == Flag::Yes
    }
}

/// Accuracy when tool selection and argument generation use different models.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecoupledRow {
    pub config: &'static str,
    pub tool_selection: &'static str,
    pub arg_generation: &'static str,
    pub tool_fit: f64,
    pub highlighted: bool,
}

impl DecoupledRow {
    pub const HEADERS: [&'static str; 3] = [
        "Tool Selection Model",
        "Argument Generation Model",
        "ToolFit (%)",
    ];

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.tool_selection.to_string(),
            self.arg_generation.to_string(),
            format!("{:.1}", self.tool_fit)
        ]
    }
}

/// Accuracy per application toolset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApplicationRow {
    pub model: &'static str,
    pub filesystem: f64,
    pub monday: f64,
    pub notion: f64,
    pub reasoning: Flag,
    pub highlighted: bool,
}

impl ApplicationRow {
    pub const HEADERS: [&'static str; 5] = ["Model", "Filesystem", "Monday", "Notion", "Reasoning"];

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.model.to_string(),
            format!("{:.1}%", self.filesystem),
            format!("{:.1}%", self.monday),
            format!("{:.1}%", self.notion),
            self.reasoning.label().to_string()
        ]
    }
}

const BASELINE: [BaselineRow; 6] = [
    BaselineRow { model: "Qwen-2.5-7B", tool_fit: 16.0, reasoning: Flag::No, frontier: Flag::No },
    BaselineRow { model: "Qwen-3-8B*", tool_fit: 34.2, reasoning: Flag::No, frontier: Flag::No },
    BaselineRow { model: "Llama-3.1-8B", tool_fit: 42.4, reasoning: Flag::No, frontier: Flag::No },
    BaselineRow { model: "xLAM-2-8B", tool_fit: 15.8, reasoning: Flag::No, frontier: Flag::No },
    BaselineRow { model: "Qwen-3-8B", tool_fit: 52.3, reasoning: Flag::Yes, frontier: Flag::No },
    BaselineRow {
        model: "GPT-5-mini",
        tool_fit: 88.5,
        reasoning: Flag::NotApplicable,
        frontier: Flag::Yes,
    },
];

const DECOUPLED: [DecoupledRow; 4] = [
    DecoupledRow {
        config: "Both Local",
        tool_selection: "Qwen-2.5-7B",
        arg_generation: "Qwen-2.5-7B",
        tool_fit: 16.0,
        highlighted: false,
    },
    DecoupledRow {
        config: "Frontier Args",
        tool_selection: "Qwen-2.5-7B",
        arg_generation: "GPT-5-mini",
        tool_fit: 28.8,
        highlighted: false,
    },
    DecoupledRow {
        config: "Frontier Selection",
        tool_selection: "GPT-5-mini",
        arg_generation: "Qwen-2.5-7B",
        tool_fit: 60.8,
        highlighted: true,
    },
    DecoupledRow {
        config: "Both Frontier",
        tool_selection: "GPT-5-mini",
        arg_generation: "GPT-5-mini",
        tool_fit: 88.5,
        highlighted: false,
    },
];

const APPLICATIONS: [ApplicationRow; 4] = [
    ApplicationRow {
        model: "DualTuneModel-7B",
        filesystem: 61.5,
        monday: 43.2,
        notion: 71.8,
        reasoning: Flag::No,
        highlighted: true,
    },
    ApplicationRow {
        model: "Qwen-2.5-7B",
        filesystem: 15.0,
        monday: 19.2,
        notion: 33.4,
        reasoning: Flag::No,
        highlighted: false,
    },
    ApplicationRow {
        model: "Qwen-3-32B-Quant",
        filesystem: 58.6,
        monday: 37.0,
        notion: 85.6,
        reasoning: Flag::Yes,
        highlighted: false,
    },
    ApplicationRow {
        model: "GPT-5-mini",
        filesystem: 88.4,
        monday: 76.4,
        notion: 91.6,
        reasoning: Flag::NotApplicable,
        highlighted: false,
    },
];

pub fn baseline_results() -> &'static [BaselineRow] {
    &BASELINE
}

pub fn decoupled_results() -> &'static [DecoupledRow] {
    &DECOUPLED
}

pub fn application_results() -> &'static [ApplicationRow] {
    &APPLICATIONS
}
