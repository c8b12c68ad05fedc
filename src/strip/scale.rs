const DOMAIN_MIN: f32 = 0.0;
const DOMAIN_MAX: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    range_start: f32,
    range_end: f32,
}

impl ValueScale {
    pub fn for_width(drawable_width: f32, inset: f32) -> Self {
        let inset = inset.max(0.0);
        let width = if drawable_width.is_finite() {
            drawable_width.max(inset * 2.0)
        } else {
            inset * 2.0
        };

        Self {
            range_start: inset,
            range_end: width - inset,
        }
    }

    pub fn map(self, value: f32) -> f32 {
        let t = (value - DOMAIN_MIN) / (DOMAIN_MAX - DOMAIN_MIN);
        self.range_start + (self.range_end - self.range_start) * t
    }

    pub fn range(self) -> (f32, f32) {
        (self.range_start, self.range_end)
    }
}

pub fn map_value_to_x(value: f32, drawable_width: f32, inset: f32) -> f32 {
    ValueScale::for_width(drawable_width, inset).map(value)
}
