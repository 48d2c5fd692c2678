use std::collections::HashMap;
use std::fmt::{self, Write};

use prometheus::core::Desc;

use crate::{LABEL_NAMES, MetricKind, MetricSample};

/// Gauge descriptors for every [`MetricKind`], validated once at startup.
#[derive(Debug)]
pub struct JobMetrics {
    descs: Vec<Desc>,
}

impl JobMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let descs = MetricKind::ALL
            .iter()
            .map(|kind| {
                Desc::new(
                    kind.name().to_string(),
                    kind.help().to_string(),
                    LABEL_NAMES.iter().map(|l| l.to_string()).collect(),
                    HashMap::new(),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { descs })
    }

    pub fn desc(&self, kind: MetricKind) -> &Desc {
        &self.descs[kind.index()]
    }

    /// Render samples in the Prometheus text exposition format (0.0.4).
    ///
    /// One gauge family per kind in [`MetricKind::ALL`] order, samples in input
    /// order, kinds without samples left out. Every explicit sample time is
    /// written, including the 0 ms epoch sentinel that `prometheus::TextEncoder`
    /// would drop.
    pub fn render(&self, samples: &[MetricSample]) -> Result<Vec<u8>, prometheus::Error> {
        let mut out = String::new();
        for kind in MetricKind::ALL {
            let series: Vec<&MetricSample> = samples.iter().filter(|s| s.kind == kind).collect();
            if series.is_empty() {
                continue;
            }
            write_family(&mut out, self.desc(kind), &series)
                .map_err(|e| prometheus::Error::Msg(format!("text rendering failed: {e}")))?;
        }
        Ok(out.into_bytes())
    }
}

fn write_family(out: &mut String, desc: &Desc, series: &[&MetricSample]) -> fmt::Result {
    writeln!(out, "# HELP {} {}", desc.fq_name, escape(&desc.help, false))?;
    writeln!(out, "# TYPE {} gauge", desc.fq_name)?;

    for sample in series {
        out.push_str(&desc.fq_name);
        out.push('{');
        for (i, (name, value)) in LABEL_NAMES.iter().zip(sample.label_values()).enumerate() {
            if i > 0 {
                out.push(',');
            }
            write!(out, "{name}=\"{}\"", escape(value, true))?;
        }
        write!(out, "}} {}", format_value(sample.value))?;
        if let Some(ms) = sample.timestamp_ms() {
            write!(out, " {ms}")?;
        }
        out.push('\n');
    }
    Ok(())
}

fn escape(raw: &str, quotes: bool) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '"' if quotes => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        v.to_string()
    }
}
