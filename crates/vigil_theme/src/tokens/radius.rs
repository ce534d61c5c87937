//! Border radius tokens

token_enum! {
    /// Global corner rounding level
    #[derive(Default)]
    pub enum RadiusLevel as "radius level" {
        None => "none",
        Sm => "sm",
        #[default]
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Full => "full",
    }
}

token_enum! {
    /// Shared size scale; also the contextual bucket used for radius lookup
    #[derive(Default)]
    pub enum Size as "size" {
        Sm => "sm",
        #[default]
        Md => "md",
        Lg => "lg",
    }
}

/// The reduced size category a primitive maps onto for radius lookup
pub type SizeBucket = Size;

/// A concrete corner shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusDescriptor {
    pub class: &'static str,
    /// Corner radius in pixels
    pub px: f32,
}

impl RadiusDescriptor {
    const fn new(class: &'static str, px: f32) -> Self {
        Self { class, px }
    }

    /// True for square corners
    pub fn is_square(&self) -> bool {
        self.px == 0.0
    }
}

const SQUARE: RadiusDescriptor = RadiusDescriptor::new("rounded-none", 0.0);
const PILL: RadiusDescriptor = RadiusDescriptor::new("rounded-full", 9999.0);

/// Radius level x bucket (sm, md, lg). Large surfaces such as cards stay
/// legible at `full` by capping at `rounded-3xl`.
const RADIUS_TABLE: [[RadiusDescriptor; 3]; 6] = [
    // none
    [SQUARE, SQUARE, SQUARE],
    // sm
    [
        RadiusDescriptor::new("rounded-sm", 2.0),
        RadiusDescriptor::new("rounded", 4.0),
        RadiusDescriptor::new("rounded-md", 6.0),
    ],
    // md
    [
        RadiusDescriptor::new("rounded", 4.0),
        RadiusDescriptor::new("rounded-md", 6.0),
        RadiusDescriptor::new("rounded-lg", 8.0),
    ],
    // lg
    [
        RadiusDescriptor::new("rounded-md", 6.0),
        RadiusDescriptor::new("rounded-lg", 8.0),
        RadiusDescriptor::new("rounded-xl", 12.0),
    ],
    // xl
    [
        RadiusDescriptor::new("rounded-lg", 8.0),
        RadiusDescriptor::new("rounded-xl", 12.0),
        RadiusDescriptor::new("rounded-2xl", 16.0),
    ],
    // full
    [PILL, PILL, RadiusDescriptor::new("rounded-3xl", 24.0)],
];

/// Look up the corner shape for a radius level in a size bucket
pub fn resolve_radius(level: RadiusLevel, bucket: SizeBucket) -> RadiusDescriptor {
    RADIUS_TABLE[level.index()][bucket.index()]
}
