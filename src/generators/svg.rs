use crate::{
    config::EngineConfig,
    error::{ArtError, Result},
    models::{LandscapeParams, PatternKind, SvgRequest, CANVAS_HEIGHT, CANVAS_WIDTH},
    palette::Hsl,
};
use rand::Rng;
use std::fmt::Write as _;
use std::sync::Arc;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const AVATAR_SIZE: u32 = 100;

/// Colors and motif derived from an agent name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarIdentity {
    pub hash: u64,
    pub colors: [Hsl; 3],
    pub pattern: PatternKind,
}

impl AvatarIdentity {
    pub fn from_name(name: &str) -> Self {
        let hash: u64 = name.chars().map(|c| u64::from(u32::from(c))).sum();
        let hue = |offset: u64| ((hash + offset) % 360) as u32;

        Self {
            hash,
            colors: [
                Hsl::new(hue(0), 70, 50),
                Hsl::new(hue(90), 60, 45),
                Hsl::new(hue(180), 65, 55),
            ],
            pattern: PatternKind::ALL[(hash % 3) as usize],
        }
    }
}

#[derive(Clone)]
pub struct SvgGenerator {
    config: Arc<EngineConfig>,
}

impl SvgGenerator {
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self { config }
    }

    pub fn render<R: Rng + ?Sized>(&self, request: &SvgRequest, rng: &mut R) -> Result<String> {
        match request {
            SvgRequest::Gradient(params) => {
                self.gradient(&params.colors, params.width, params.height)
            }
            SvgRequest::Landscape(params) => self.landscape(params, rng),
            SvgRequest::Pattern(params) => self.pattern(params.pattern, &params.colors),
            SvgRequest::Avatar(params) => self.avatar(&params.name),
        }
    }

    pub fn gradient(&self, colors: &[String], width: u32, height: u32) -> Result<String> {
        if colors.is_empty() {
            return Err(ArtError::validation("gradient requires at least one color"));
        }
        if width == 0 || height == 0 {
            return Err(ArtError::validation(format!(
                "gradient canvas must be non-empty, got {}x{}",
                width, height
            )));
        }

        let last = colors.len().saturating_sub(1).max(1) as f64;
        let mut stops = String::new();
        for (i, color) in colors.iter().enumerate() {
            let offset = i as f64 / last * 100.0;
            let _ = writeln!(
                stops,
                r#"      <stop offset="{}%" stop-color="{}"/>"#,
                offset,
                escape_xml(color)
            );
        }

        Ok(format!(
            r#"<svg width="{width}" height="{height}" xmlns="{ns}">
  <defs>
    <linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">
{stops}    </linearGradient>
  </defs>
  <rect width="100%" height="100%" fill="url(#grad)"/>
</svg>"#,
            width = width,
            height = height,
            ns = SVG_NS,
            stops = stops,
        ))
    }

    /// Peak heights come from `rng`; pass a seeded generator for reproducible output.
    pub fn landscape<R: Rng + ?Sized>(
        &self,
        params: &LandscapeParams,
        rng: &mut R,
    ) -> Result<String> {
        if params.mountains > self.config.max_mountains {
            return Err(ArtError::validation(format!(
                "at most {} mountains are supported, got {}",
                self.config.max_mountains, params.mountains
            )));
        }

        let width = f64::from(CANVAS_WIDTH);
        let height = f64::from(CANVAS_HEIGHT);
        let spacing = width / (params.mountains + 1) as f64;
        let peaks = (0..params.mountains)
            .map(|i| {
                let x = (i + 1) as f64 * spacing;
                let peak = rng.random_range(100.0..250.0);
                format!("{},{}", x, height - peak)
            })
            .collect::<Vec<_>>()
            .join(" ");

        let colors = &params.colors;
        Ok(format!(
            r#"<svg width="{w}" height="{h}" xmlns="{ns}">
  <rect width="100%" height="100%" fill="{sky}"/>
  <circle cx="{sun_x}" cy="50" r="30" fill="{sun}"/>
  <polygon points="0,{h} {peaks} {w},{h}" fill="{ground}" opacity="0.9"/>
  <rect x="0" y="{ground_y}" width="{w}" height="20" fill="{ground}"/>
</svg>"#,
            w = CANVAS_WIDTH,
            h = CANVAS_HEIGHT,
            ns = SVG_NS,
            sky = escape_xml(&colors.sky),
            sun = escape_xml(&colors.sun),
            ground = escape_xml(&colors.ground),
            sun_x = params.sun_position.x(),
            peaks = peaks,
            ground_y = CANVAS_HEIGHT - 20,
        ))
    }

    pub fn pattern(&self, kind: PatternKind, colors: &[String]) -> Result<String> {
        let attrs = format!(
            r#"width="{}" height="{}" xmlns="{}""#,
            CANVAS_WIDTH, CANVAS_HEIGHT, SVG_NS
        );
        pattern_markup(kind, colors, &attrs)
    }

    /// Identicon for `name`. The same name always yields the same markup.
    ///
    /// Empty or whitespace-only names are rejected rather than rendered
    /// without initials.
    pub fn avatar(&self, name: &str) -> Result<String> {
        if name.trim().is_empty() {
            return Err(ArtError::validation("avatar requires a non-empty name"));
        }

        let identity = AvatarIdentity::from_name(name);
        let colors: Vec<String> = identity.colors.iter().map(Hsl::to_string).collect();
        let initials: String = name.chars().take(2).collect::<String>().to_uppercase();

        // motif scaled down onto the avatar canvas
        let nested_attrs = format!(
            r#"width="{s}" height="{s}" viewBox="0 0 {w} {h}" preserveAspectRatio="xMidYMid slice""#,
            s = AVATAR_SIZE,
            w = CANVAS_WIDTH,
            h = CANVAS_HEIGHT,
        );
        let motif = pattern_markup(identity.pattern, &colors, &nested_attrs)?;

        Ok(format!(
            r#"<svg width="{s}" height="{s}" xmlns="{ns}">
<rect width="100%" height="100%" fill="{c0}" rx="10"/>
{motif}
<circle cx="50" cy="50" r="35" fill="none" stroke="{c2}" stroke-width="4" opacity="0.5"/>
<text x="50" y="55" text-anchor="middle" fill="{c1}" font-size="12" font-weight="bold">{initials}</text>
</svg>"#,
            s = AVATAR_SIZE,
            ns = SVG_NS,
            c0 = colors[0],
            c1 = colors[1],
            c2 = colors[2],
            motif = motif,
            initials = escape_xml(&initials),
        ))
    }
}

fn pattern_markup(kind: PatternKind, colors: &[String], svg_attrs: &str) -> Result<String> {
    if colors.len() < 2 {
        return Err(ArtError::validation(format!(
            "pattern requires two colors, got {}",
            colors.len()
        )));
    }
    let fg = escape_xml(&colors[0]);
    let accent = escape_xml(&colors[1]);

    let body = match kind {
        PatternKind::Grid => format!(
            r#"  <defs>
    <pattern id="grid" width="20" height="20" patternUnits="userSpaceOnUse">
      <path d="M 20 0 L 0 0 0 20" fill="none" stroke="{}" stroke-width="1"/>
    </pattern>
  </defs>
  <rect width="100%" height="100%" fill="url(#grid)"/>"#,
            fg
        ),
        PatternKind::Dots => {
            let mut body = format!(r#"  <rect width="100%" height="100%" fill="{}"/>"#, fg);
            for (cx, cy, r) in [(50, 50, 3), (150, 100, 5), (250, 50, 4), (350, 150, 6)] {
                let _ = write!(
                    body,
                    "\n  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                    cx, cy, r, accent
                );
            }
            body
        }
        PatternKind::Waves => {
            let mut body = format!(r#"  <rect width="100%" height="100%" fill="{}"/>"#, fg);
            for base in [150, 180, 210] {
                let _ = write!(
                    body,
                    "\n  <path d=\"M0,{b} Q100,{crest} 200,{b} T400,{b}\" fill=\"none\" stroke=\"{c}\" stroke-width=\"3\"/>",
                    b = base,
                    crest = base - 50,
                    c = accent
                );
            }
            body
        }
    };

    Ok(format!("<svg {}>\n{}\n</svg>", svg_attrs, body))
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SunPosition;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator() -> SvgGenerator {
        SvgGenerator::new(Arc::new(EngineConfig::default()))
    }

    fn colors(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    /// Opening and closing tags must balance for the markup to be well formed.
    fn assert_balanced(markup: &str, tag: &str) {
        let opens = markup.matches(&format!("<{} ", tag)).count()
            + markup.matches(&format!("<{}>", tag)).count();
        let closes = markup.matches(&format!("</{}>", tag)).count();
        assert_eq!(opens, closes, "unbalanced <{}> in {}", tag, markup);
    }

    #[test]
    fn test_gradient_stops() {
        let svg = generator()
            .gradient(&colors(&["#f00", "#0f0", "#00f"]), 400, 300)
            .unwrap();
        assert!(svg.contains(r##"<stop offset="0%" stop-color="#f00"/>"##));
        assert!(svg.contains(r##"<stop offset="50%" stop-color="#0f0"/>"##));
        assert!(svg.contains(r##"<stop offset="100%" stop-color="#00f"/>"##));
        assert!(svg.starts_with(r##"<svg width="400" height="300""##));
        assert_balanced(&svg, "svg");
    }

    #[test]
    fn test_gradient_single_color() {
        let svg = generator().gradient(&colors(&["#abc"]), 10, 10).unwrap();
        assert!(svg.contains(r##"offset="0%""##));
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn test_gradient_deterministic() {
        let palette = colors(&["#ff6b6b", "#ffd93d"]);
        let a = generator().gradient(&palette, 320, 200).unwrap();
        let b = generator().gradient(&palette, 320, 200).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_gradient_validation() {
        assert!(generator().gradient(&[], 400, 300).is_err());
        assert!(generator().gradient(&colors(&["#000"]), 0, 300).is_err());
    }

    #[test]
    fn test_landscape_seeded() {
        let params = LandscapeParams {
            sun_position: SunPosition::Left,
            ..LandscapeParams::default()
        };
        let a = generator()
            .landscape(&params, &mut StdRng::seed_from_u64(7))
            .unwrap();
        let b = generator()
            .landscape(&params, &mut StdRng::seed_from_u64(7))
            .unwrap();
        assert_eq!(a, b);
        assert!(a.contains(r##"<circle cx="50" cy="50" r="30" fill="#FFD700"/>"##));
        assert!(a.contains(r##"<polygon points="0,300 100,"##));
        assert!(a.contains(r##" 400,300" fill="#228B22""##));
    }

    #[test]
    fn test_landscape_sun_anchors() {
        for (position, cx) in [
            (SunPosition::Left, 50),
            (SunPosition::Center, 200),
            (SunPosition::Right, 350),
        ] {
            let params = LandscapeParams {
                sun_position: position,
                ..LandscapeParams::default()
            };
            let svg = generator()
                .landscape(&params, &mut StdRng::seed_from_u64(3))
                .unwrap();
            assert!(svg.contains(&format!(r#"<circle cx="{}" cy="50" r="30""#, cx)));
        }
        assert_eq!(LandscapeParams::default().sun_position.x(), 350);
    }

    #[test]
    fn test_landscape_peak_range() {
        let params = LandscapeParams {
            mountains: 10,
            ..LandscapeParams::default()
        };
        let svg = generator()
            .landscape(&params, &mut StdRng::seed_from_u64(42))
            .unwrap();
        let points = svg
            .split("points=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .unwrap();
        let coords: Vec<&str> = points.split(' ').collect();
        assert_eq!(coords.len(), 12);
        for peak in &coords[1..11] {
            let y: f64 = peak.split(',').nth(1).unwrap().parse().unwrap();
            assert!(y > 50.0 && y <= 200.0, "peak y out of range: {}", y);
        }
    }

    #[test]
    fn test_landscape_mountain_limit() {
        let params = LandscapeParams {
            mountains: 33,
            ..LandscapeParams::default()
        };
        assert!(generator()
            .landscape(&params, &mut StdRng::seed_from_u64(1))
            .is_err());
    }

    #[test]
    fn test_patterns() {
        let palette = colors(&["#111", "#eee"]);
        let grid = generator().pattern(PatternKind::Grid, &palette).unwrap();
        assert!(grid.contains(r##"stroke="#111""##));
        let dots = generator().pattern(PatternKind::Dots, &palette).unwrap();
        assert_eq!(dots.matches("<circle").count(), 4);
        let waves = generator().pattern(PatternKind::Waves, &palette).unwrap();
        assert!(waves.contains(r##"d="M0,180 Q100,130 200,180 T400,180""##));
        for svg in [grid, dots, waves] {
            assert_balanced(&svg, "svg");
        }
        assert!(generator()
            .pattern(PatternKind::Dots, &colors(&["#111"]))
            .is_err());
    }

    #[test]
    fn test_avatar_identity() {
        // 'a' + 'b' = 97 + 98
        let identity = AvatarIdentity::from_name("ab");
        assert_eq!(identity.hash, 195);
        assert_eq!(identity.colors[0].to_string(), "hsl(195, 70%, 50%)");
        assert_eq!(identity.colors[1].to_string(), "hsl(285, 60%, 45%)");
        assert_eq!(identity.colors[2].to_string(), "hsl(15, 65%, 55%)");
        assert_eq!(identity.pattern, PatternKind::Grid);
    }

    #[test]
    fn test_avatar_deterministic() {
        let a = generator().avatar("clawdbot").unwrap();
        let b = generator().avatar("clawdbot").unwrap();
        assert_eq!(a, b);
        assert!(a.contains(">CL</text>"));
        assert!(a.starts_with(r##"<svg width="100" height="100""##));
        assert_balanced(&a, "svg");
        assert_ne!(a, generator().avatar("nova").unwrap());
    }

    #[test]
    fn test_avatar_escapes_name() {
        let svg = generator().avatar("<x").unwrap();
        assert!(svg.contains(">&lt;X</text>"));
        assert!(generator().avatar("  ").is_err());
    }
}
