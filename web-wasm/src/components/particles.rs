//! 背景の浮遊パーティクル（装飾のみ）

use leptos::prelude::*;

/// パーティクル1個分の見た目
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    /// 5〜13px
    pub size: f64,
    /// 0〜100vw
    pub left: f64,
    /// 0〜5s
    pub delay: f64,
    /// 0〜360
    pub hue: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {left:.2}vw; \
             background-color: hsla({hue:.0}, 80%, 60%, 0.8); animation-delay: {delay:.2}s",
            size = self.size,
            left = self.left,
            hue = self.hue,
            delay = self.delay,
        )
    }
}

/// `random` は [0, 1) の乱数を返す関数
pub fn generate_particles(count: usize, mut random: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count)
        .map(|id| Particle {
            id,
            size: random() * 8.0 + 5.0,
            left: random() * 100.0,
            delay: random() * 5.0,
            hue: random() * 360.0,
        })
        .collect()
}

#[component]
pub fn Particles(count: usize) -> impl IntoView {
    let particles = generate_particles(count, js_sys::Math::random);

    view! {
        <div class="particles">
            {particles
                .into_iter()
                .map(|p| view! { <span class="particle" style=p.style() /> })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_ranges() {
        let mut values = [0.0, 0.5, 0.999].into_iter().cycle();
        let particles = generate_particles(9, || values.next().unwrap_or(0.0));
        assert_eq!(particles.len(), 9);
        for p in &particles {
            assert!((5.0..13.0).contains(&p.size));
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..5.0).contains(&p.delay));
            assert!((0.0..360.0).contains(&p.hue));
        }
    }

    #[test]
    fn test_ids_are_sequential() {
        let particles = generate_particles(3, || 0.25);
        let ids: Vec<usize> = particles.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_style() {
        let p = Particle { id: 0, size: 5.0, left: 50.0, delay: 1.5, hue: 180.0 };
        let style = p.style();
        assert!(style.contains("width: 5.00px"));
        assert!(style.contains("left: 50.00vw"));
        assert!(style.contains("hsla(180, 80%, 60%, 0.8)"));
        assert!(style.contains("animation-delay: 1.50s"));
    }
}
