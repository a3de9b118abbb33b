use leptos::prelude::*;

/// Inline script revealing `.reveal` elements as they scroll into view.
///
/// Rendered once in the document head. A mutation observer picks up elements
/// added by client-side navigation.
#[component]
pub fn RevealScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                document.documentElement.classList.add('js');
                if (!('IntersectionObserver' in window)) {
                    document.documentElement.classList.remove('js');
                    return;
                }

                const observer = new IntersectionObserver((entries) => {
                    entries.forEach(entry => {
                        if (entry.isIntersecting) {
                            entry.target.classList.add('visible');
                            observer.unobserve(entry.target);
                        }
                    });
                }, {
                    threshold: 0.1,
                    rootMargin: '0px 0px -50px 0px'
                });

                function observeAll(root) {
                    if (root.classList && root.classList.contains('reveal')) {
                        observer.observe(root);
                    }
                    if (root.querySelectorAll) {
                        root.querySelectorAll('.reveal:not(.visible)').forEach(el => observer.observe(el));
                    }
                }

                function init() {
                    observeAll(document.body);
                    new MutationObserver((mutations) => {
                        mutations.forEach(m => m.addedNodes.forEach(observeAll));
                    }).observe(document.body, { childList: true, subtree: true });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', init);
                } else {
                    init();
                }
            })();
            "#
        </script>
    }
}
