use leptos::prelude::*;

/// Shape of a skeleton placeholder
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SkeletonVariant {
    /// Single line of text
    Text,
    /// Block such as an image or card
    #[default]
    Rectangular,
    /// Avatar or icon
    Circular,
}

impl SkeletonVariant {
    fn class(&self) -> &'static str {
        match self {
            SkeletonVariant::Text => "h-4 w-full rounded",
            SkeletonVariant::Rectangular => "rounded-lg",
            SkeletonVariant::Circular => "rounded-full",
        }
    }
}

/// Loading animation of a skeleton placeholder
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SkeletonAnimation {
    #[default]
    Pulse,
    Wave,
    None,
}

impl SkeletonAnimation {
    fn class(&self) -> &'static str {
        match self {
            SkeletonAnimation::Pulse => "animate-pulse",
            SkeletonAnimation::Wave => "skeleton-wave",
            SkeletonAnimation::None => "",
        }
    }
}

fn skeleton_class(variant: SkeletonVariant, animation: SkeletonAnimation, extra: &str) -> String {
    ["bg-gray-200 dark:bg-gray-700", variant.class(), animation.class(), extra]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Placeholder shown while content loads
#[component]
pub fn Skeleton(
    #[prop(default = SkeletonVariant::Rectangular)] variant: SkeletonVariant,
    #[prop(default = SkeletonAnimation::Pulse)] animation: SkeletonAnimation,
    /// Sizing and positioning classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! { <div class=skeleton_class(variant, animation, class) aria-hidden="true"></div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_combines_parts() {
        let class = skeleton_class(SkeletonVariant::Circular, SkeletonAnimation::Wave, "w-10 h-10");
        assert!(class.contains("rounded-full"));
        assert!(class.contains("skeleton-wave"));
        assert!(class.ends_with("w-10 h-10"));
    }

    #[test]
    fn test_no_animation_leaves_no_gap() {
        let class = skeleton_class(SkeletonVariant::Rectangular, SkeletonAnimation::None, "");
        assert!(!class.contains("  "));
        assert!(!class.contains("animate"));
        assert!(!class.ends_with(' '));
    }
}
