//! Resume content shown by the folio portfolio.
//!
//! [`Profile::builtin`] carries the default content. A TOML file may override
//! any subset of fields; the rest keep their built-in values.

use serde::{Deserialize, Serialize};

/// A company the owner runs or works for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub role: String,
    pub desc: String,
}

/// One education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub course: String,
    pub status: String,
}

/// Contact links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    pub github: String,
    pub linkedin: String,
    pub email: String,
}

/// A labelled group of skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub label: String,
    pub items: Vec<String>,
}

/// A small tile in the hero card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Focus {
    pub label: String,
    pub detail: String,
}

/// A point on the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub when: String,
    #[serde(rename = "where")]
    pub at: String,
    pub what: String,
    pub details: String,
}

/// A highlighted project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub link: String,
}

/// Everything the page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Short handle shown in the navbar.
    pub brand: String,
    pub title: String,
    pub summary: String,
    pub tagline: String,
    /// Pill above the name in the hero.
    pub badge: String,
    /// Phrases cycled by the hero typewriter.
    pub roles: Vec<String>,
    /// Chips under the hero summary.
    pub chips: Vec<String>,
    pub focus: Vec<Focus>,
    pub availability: String,
    pub companies: Vec<Company>,
    pub education: Vec<Education>,
    pub links: Links,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<TimelineEntry>,
    pub projects: Vec<Project>,
    pub contact_heading: String,
    pub contact_pitch: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn education(school: &str, course: &str, status: &str) -> Education {
    Education {
        school: school.into(),
        course: course.into(),
        status: status.into(),
    }
}

fn focus(label: &str, detail: &str) -> Focus {
    Focus {
        label: label.into(),
        detail: detail.into(),
    }
}

fn skills(label: &str, items: &[&str]) -> SkillGroup {
    SkillGroup {
        label: label.into(),
        items: strings(items),
    }
}

impl Profile {
    /// The built-in content.
    pub fn builtin() -> Self {
        Self {
            name: "João Vitor L. Arut".into(),
            brand: "JVLArut".into(),
            title: "Especialista em Cibersegurança e Engenharia de Hardware".into(),
            summary: "Com 10+ anos de experiência, foco em Red Team/Pentest, forense, análise e \
                      criação de malwares, web hacking e rootkits. Programação de baixo nível em \
                      C/C++/Assembly e engenharia reversa com IDA Pro, OllyDbg e Scylla."
                .into(),
            tagline: "Conecto tecnologia, segurança e inovação para proteger e transformar negócios."
                .into(),
            badge: "BackTrack Security · TDL Software".into(),
            roles: strings(&[
                "Red Team & Pentest",
                "Engenharia de Hardware (DMA/FPGA)",
                "Malware & Rootkits (Pesquisa)",
                "Reverse Engineering",
            ]),
            chips: strings(&["Pentest", "Red Team", "DMA/FPGA", "Reverse", "Malware"]),
            focus: vec![
                focus("Red Team", "Cobalt Strike, BR, Metasploit"),
                focus("Reverse", "IDA, OllyDbg, Scylla"),
                focus("Hardware", "DMA, FPGA, PCIe"),
                focus("Malware", "Rootkits, Evasion, PoCs"),
            ],
            availability: "Disponível para projetos de alto impacto".into(),
            companies: vec![
                Company {
                    name: "BackTrack Security".into(),
                    role: "Fundador e Líder · Red Team".into(),
                    desc: "Operações ofensivas, simulações de ataque, emulação de adversários e \
                           segurança ofensiva ponta a ponta."
                        .into(),
                },
                Company {
                    name: "TDL Software".into(),
                    role: "Fundador · Engenharia de Hardware".into(),
                    desc: "Placas DMA, FPGA, Hybrid PCIe Trace Tool, desenvolvimento de firmwares \
                           (Vivado Design Suite)."
                        .into(),
                },
            ],
            education: vec![
                education("ETEC Helcy Moreira Martins Aguiar", "Ensino Médio", "Concluído"),
                education(
                    "ETEC Helcy Moreira Martins Aguiar",
                    "Desenvolvimento de Sistemas",
                    "Concluído",
                ),
                education("HackerSec", "HCP", "Concluído"),
                education("HackerSec", "Forense Computacional", "Concluído"),
                education("HackerSec", "Análise e Desenvolvimento de Malware", "Concluído"),
                education("Cisco", "Cyber Threat Management", "Concluído"),
                education("Microsoft Learn", "Hyper-V e Virtualização no Windows", "Concluído"),
                education("Cisco", "Junior Cybersecurity Analyst", "Concluído"),
                education("HackerSec", "Segurança Web", "Concluído"),
                education("FATEC Lins", "Análise e Desenvolvimento de Sistemas", "Em curso"),
            ],
            links: Links {
                github: "https://github.com/".into(),
                linkedin: "https://www.linkedin.com/".into(),
                email: "mailto:joao@example.com".into(),
            },
            skills: vec![
                skills(
                    "Red Team",
                    &[
                        "Pentest",
                        "Red Team",
                        "Cobalt Strike",
                        "Brute Ratel",
                        "Metasploit",
                        "Ettercap",
                        "BeEF",
                    ],
                ),
                skills(
                    "Reverse",
                    &["IDA Pro", "OllyDbg", "Scylla", "x64dbg", "WinDbg", "Ghidra"],
                ),
                skills(
                    "Low-level",
                    &["C", "C++", "Assembly", "Rootkits", "Malware Dev"],
                ),
                skills(
                    "Hardware",
                    &["DMA", "FPGA", "Vivado", "PCIe", "Firmware", "Hardware Hacking"],
                ),
                skills("Web/AppSec", &["Web Hacking", "AppSec", "Hardening"]),
            ],
            experience: vec![
                TimelineEntry {
                    when: "Presente".into(),
                    at: "BackTrack Security".into(),
                    what: "Fundador e Líder · Red Team".into(),
                    details: "Operações ofensivas, emulação de adversários e segurança ofensiva \
                              ponta a ponta."
                        .into(),
                },
                TimelineEntry {
                    when: "Presente".into(),
                    at: "TDL Software".into(),
                    what: "Fundador · Engenharia de Hardware".into(),
                    details: "Placas DMA, FPGA, design e firmwares com Xilinx Vivado.".into(),
                },
            ],
            projects: vec![
                Project {
                    title: "Hybrid PCIe Trace Tool".into(),
                    description: "Ferramenta de tracing para PCIe com captura, análise e injeção \
                                  controlada para validação de DMA/FPGA."
                        .into(),
                    tags: strings(&["PCIe", "FPGA", "DMA"]),
                    link: "#".into(),
                },
                Project {
                    title: "Framework de Emulação de Adversários".into(),
                    description: "Playbooks táticos e TTPs automatizados para Red Team com \
                                  integrações C2."
                        .into(),
                    tags: strings(&["Red Team", "C2", "Automation"]),
                    link: "#".into(),
                },
                Project {
                    title: "Rootkit PoC para estudos".into(),
                    description: "Pesquisa acadêmica/PoC sobre técnicas de ocultação e \
                                  persistência (uso ético e controlado)."
                        .into(),
                    tags: strings(&["Kernel", "EDR Evasion"]),
                    link: "#".into(),
                },
            ],
            contact_heading: "Vamos conversar".into(),
            contact_pitch: "Conecte-se comigo para discutir cibersegurança, hardware ou projetos \
                            inovadores!"
                .into(),
        }
    }

    /// Names of displayed fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let checks = [
            ("name", self.name.is_empty()),
            ("brand", self.brand.is_empty()),
            ("title", self.title.is_empty()),
            ("summary", self.summary.is_empty()),
            ("tagline", self.tagline.is_empty()),
            ("roles", self.roles.is_empty()),
            ("links.github", self.links.github.is_empty()),
            ("links.linkedin", self.links.linkedin.is_empty()),
            ("links.email", self.links.email.is_empty()),
            ("skills", self.skills.is_empty()),
            ("projects", self.projects.is_empty()),
        ];
        checks
            .into_iter()
            .filter_map(|(field, missing)| missing.then_some(field))
            .collect()
    }

    /// E-mail address without the `mailto:` scheme.
    pub fn email_address(&self) -> &str {
        self.links
            .email
            .strip_prefix("mailto:")
            .unwrap_or(&self.links.email)
    }
}
