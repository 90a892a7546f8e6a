//! Skills taxonomy shown on the about page

use serde::Serialize;

use super::colors::color_for;

/// Neutral gray used when a technology has no brand color
const FALLBACK_COLOR: &str = "#404040";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stack {
    // Languages
    Python,
    Java,
    Csharp,
    R,
    Typescript,
    Javascript,
    Bash,
    Powershell,
    Cpp,
    Vbnet,
    Matlab,
    Latex,
    Go,

    // Frontend
    React,
    Reactnative,
    Web,

    // Backend
    Graphql,
    Node,
    Django,

    // Cloud
    Aws,
    Gcp,
    Azure,

    // Messaging
    Nats,
    Kafka,

    // Databases
    Arangodb,
    Redis,
    Postgres,
    Mongo,
    Mssql,

    // Tools
    Docker,
    Kubernetes,
    Jenkins,
    Terraform,
    Git,

    // Frameworks
    Scikit,
    Tensorflow,
    Pytorch,
}

/// Display name and color of a stack entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StackInfo {
    pub value: &'static str,
    pub color: &'static str,
}

/// Technologies used at work, in display order
pub const WORK_STACK: &[Stack] = &[
    Stack::Python,
    Stack::Java,
    Stack::Csharp,
    Stack::R,
    Stack::Cpp,
    Stack::Bash,
    Stack::Powershell,
    Stack::Vbnet,
    Stack::Matlab,
    Stack::Latex,
    Stack::Typescript,
    Stack::Javascript,
    Stack::React,
    Stack::Reactnative,
    Stack::Aws,
    Stack::Gcp,
    Stack::Azure,
    Stack::Kubernetes,
    Stack::Jenkins,
    Stack::Docker,
    Stack::Terraform,
    Stack::Git,
    Stack::Nats,
    Stack::Kafka,
    Stack::Graphql,
    Stack::Postgres,
    Stack::Redis,
    Stack::Mongo,
    Stack::Arangodb,
    Stack::Mssql,
    Stack::Web,
    Stack::Tensorflow,
    Stack::Pytorch,
    Stack::Scikit,
    Stack::Node,
    Stack::Django,
    Stack::Go,
];

impl Stack {
    /// Key into the color table
    pub fn key(&self) -> &'static str {
        match self {
            Stack::Python => "python",
            Stack::Java => "java",
            Stack::Csharp => "csharp",
            Stack::R => "r",
            Stack::Typescript => "typescript",
            Stack::Javascript => "javascript",
            Stack::Bash => "bash",
            Stack::Powershell => "powershell",
            Stack::Cpp => "cpp",
            Stack::Vbnet => "vbnet",
            Stack::Matlab => "matlab",
            Stack::Latex => "latex",
            Stack::Go => "go",
            Stack::React => "react",
            Stack::Reactnative => "reactnative",
            Stack::Web => "web",
            Stack::Graphql => "graphql",
            Stack::Node => "node",
            Stack::Django => "django",
            Stack::Aws => "aws",
            Stack::Gcp => "gcp",
            Stack::Azure => "azure",
            Stack::Nats => "nats",
            Stack::Kafka => "kafka",
            Stack::Arangodb => "arangodb",
            Stack::Redis => "redis",
            Stack::Postgres => "postgres",
            Stack::Mongo => "mongo",
            Stack::Mssql => "mssql",
            Stack::Docker => "docker",
            Stack::Kubernetes => "kubernetes",
            Stack::Jenkins => "jenkins",
            Stack::Terraform => "terraform",
            Stack::Git => "git",
            Stack::Scikit => "scikit",
            Stack::Tensorflow => "tensorflow",
            Stack::Pytorch => "pytorch",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Stack::Python => "Python",
            Stack::Java => "Java",
            Stack::Csharp => "C#",
            Stack::R => "R",
            Stack::Typescript => "TypeScript",
            Stack::Javascript => "JavaScript",
            Stack::Bash => "Bash",
            Stack::Powershell => "Powershell",
            Stack::Cpp => "C/CPP",
            Stack::Vbnet => "VB.NET",
            Stack::Matlab => "MATLAB",
            Stack::Latex => "LaTeX",
            Stack::Go => "Go",
            Stack::React => "React",
            Stack::Reactnative => "React Native",
            Stack::Web => "Web",
            Stack::Graphql => "GraphQL",
            Stack::Node => "Node",
            Stack::Django => "Django",
            Stack::Aws => "AWS",
            Stack::Gcp => "Google Cloud",
            Stack::Azure => "Azure",
            Stack::Nats => "NATS",
            Stack::Kafka => "Kafka",
            Stack::Arangodb => "ArangoDB",
            Stack::Redis => "Redis",
            Stack::Postgres => "Postgres",
            Stack::Mongo => "MongoDB",
            Stack::Mssql => "MS SQL",
            Stack::Docker => "Docker",
            Stack::Kubernetes => "Kubernetes",
            Stack::Jenkins => "Jenkins",
            Stack::Terraform => "Terraform",
            Stack::Git => "Git",
            Stack::Scikit => "scikit-learn",
            Stack::Tensorflow => "TensorFlow",
            Stack::Pytorch => "Py Torch",
        }
    }

    pub fn info(&self) -> StackInfo {
        StackInfo {
            value: self.display_name(),
            color: color_for(self.key()).unwrap_or(FALLBACK_COLOR),
        }
    }
}
