use maud::{html, Markup};

use crate::domain::filter::{ListingFilter, NumericRange};
use crate::domain::stats::DatasetBounds;
use crate::query::{FilterField, SIDEBAR_SOURCE, SOURCE_PARAM};

/// Slider geometry for one field. The outer bounds are widened onto the
/// step grid so the dataset's extremes are always reachable. A thumb at the
/// dataset bound sits on the outer end; any other selected value is kept
/// exactly, so an off-grid bound from a URL survives a resubmit.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderSpec {
    pub field: FilterField,
    pub outer: NumericRange,
    pub selected: NumericRange,
    pub step: f64,
}

impl SliderSpec {
    pub fn new(field: FilterField, bounds: &DatasetBounds, filter: &ListingFilter) -> Self {
        let step = field.step();
        let b = field.bounds(bounds);
        let outer = NumericRange::new(snap_down(b.min, step), snap_up(b.max, step));

        let current = field.range(filter);
        let selected = NumericRange::new(
            if current.min <= b.min {
                outer.min
            } else {
                current.min.min(outer.max)
            },
            if current.max >= b.max {
                outer.max
            } else {
                current.max.max(outer.min)
            },
        );

        Self {
            field,
            outer,
            selected,
            step,
        }
    }

    /// The `step` attribute. Browsers round a value onto the step grid, so
    /// an off-grid selection switches the slider to `any`.
    pub fn step_attr(&self) -> String {
        let on_grid = |v: f64| ((v - self.outer.min) / self.step).fract() == 0.0;
        if on_grid(self.selected.min) && on_grid(self.selected.max) {
            self.step.to_string()
        } else {
            "any".to_string()
        }
    }
}

pub fn snap_down(value: f64, step: f64) -> f64 {
    (value / step).floor() * step
}

pub fn snap_up(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}

pub fn filter_sidebar(bounds: &DatasetBounds, filter: &ListingFilter) -> Markup {
    html! {
        h2 { "🔎 Filter Listings" }
        form method="get" action="/" {
            input type="hidden" name=(SOURCE_PARAM) value=(SIDEBAR_SOURCE);
            @for field in FilterField::ALL {
                (slider(&SliderSpec::new(field, bounds, filter)))
            }
            noscript { button type="submit" { "Apply" } }
        }
        p { a href="/" { "Reset filters" } }
    }
}

fn slider(spec: &SliderSpec) -> Markup {
    let key = spec.field.key();
    let lo_id = format!("{key}-min");
    let hi_id = format!("{key}-max");
    let step = spec.step_attr();
    // Each thumb stops at the other one, so the pair never crosses.
    let lo_input = format!(
        "const hi = document.getElementById('{hi_id}'); \
         if (+this.value > +hi.value) this.value = hi.value; \
         this.parentElement.querySelector('.lo').textContent = this.value"
    );
    let hi_input = format!(
        "const lo = document.getElementById('{lo_id}'); \
         if (+this.value < +lo.value) this.value = lo.value; \
         this.parentElement.querySelector('.hi').textContent = this.value"
    );

    html! {
        div class="slider" {
            label for=(lo_id) { (spec.field.label()) }
            input
                type="range"
                id=(lo_id)
                name=(spec.field.min_param())
                min=(spec.outer.min)
                max=(spec.outer.max)
                step=(step)
                value=(spec.selected.min)
                oninput=(lo_input)
                onchange="this.form.submit()";
            input
                type="range"
                id=(hi_id)
                name=(spec.field.max_param())
                min=(spec.outer.min)
                max=(spec.outer.max)
                step=(step)
                value=(spec.selected.max)
                oninput=(hi_input)
                onchange="this.form.submit()";
            div class="values" {
                span class="lo" { (spec.selected.min) }
                " – "
                span class="hi" { (spec.selected.max) }
            }
        }
    }
}
