// Stylesheet inlined into the page shell. Class names match `markup.rs`.

pub static PAGE_CSS: &str = r#"
*, *::before, *::after { box-sizing: border-box; }
html, body { margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif; -webkit-font-smoothing: antialiased; color: #111827; }

.parallax-page { position: relative; width: 100%; overflow: hidden; background: #fff; }
.parallax-container { position: relative; }
.parallax-layer { position: fixed; inset: 0; will-change: transform; }

.sky { position: absolute; inset: 0; background: linear-gradient(to bottom, #3b82f6, #60a5fa, #93c5fd); }
.cloud { position: absolute; border-radius: 9999px; filter: blur(4px); background: rgba(255, 255, 255, 0.3); }
.cloud-1 { top: 5rem; left: 2.5rem; width: 8rem; height: 4rem; }
.cloud-2 { top: 8rem; right: 5rem; width: 10rem; height: 5rem; background: rgba(255, 255, 255, 0.25); }
.cloud-3 { top: 4rem; left: 33%; width: 9rem; height: 4.5rem; background: rgba(255, 255, 255, 0.2); }
.skyline { position: absolute; left: 0; right: 0; bottom: 0; height: 20rem; }
.skyline svg { width: 100%; height: 100%; }

.street { position: absolute; inset: 0; display: flex; align-items: flex-end; justify-content: center; }
.buildings { display: grid; grid-template-columns: repeat(5, 1fr); gap: 0.75rem; width: 100%; max-width: 72rem; padding: 0 1.5rem; }
.building { position: relative; overflow: hidden; border-radius: 0.75rem 0.75rem 0 0; box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); }
.building.tone-a { background: linear-gradient(to top, #475569, #334155); }
.building.tone-b { background: linear-gradient(to top, #64748b, #475569); }
.building.tone-c { background: linear-gradient(to top, #475569, #1e293b); }
.building.tone-d { background: linear-gradient(to top, #64748b, #334155); }
.windows { display: grid; grid-template-columns: repeat(2, 1fr); gap: 0.375rem; height: 100%; padding: 1rem 0.5rem 0.5rem; }
.window { min-height: 24px; border-radius: 0.125rem; }
.window.lit { background: #fde047; opacity: 0.8; }
.window.dark { background: #1e293b; opacity: 0.2; }
.roof { position: absolute; top: 0; left: 0; right: 0; height: 0.5rem; background: linear-gradient(to right, #fbbf24, #fcd34d, #fbbf24); }

.traffic { position: absolute; left: 0; right: 0; bottom: 4rem; display: flex; justify-content: space-between; align-items: flex-end; padding: 0 2rem; }
.vehicle { position: relative; overflow: hidden; border-radius: 0.5rem; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2); }
.vehicle.sedan { width: 7rem; height: 3.5rem; background: linear-gradient(#3b82f6, #2563eb); }
.vehicle.truck { width: 9rem; height: 4.5rem; background: linear-gradient(#ef4444, #dc2626); }
.vehicle.compact { width: 6rem; height: 3rem; background: linear-gradient(#10b981, #059669); }
.cabin { position: absolute; top: 0.25rem; left: 0.5rem; right: 0.5rem; height: 45%; border-radius: 0.375rem 0.375rem 0 0; background: rgba(255, 255, 255, 0.35); }
.truck .cabin { right: auto; width: 5rem; }
.light { position: absolute; top: 0.5rem; width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: rgba(255, 255, 255, 0.8); }
.light-left { left: 0.75rem; }
.light-right { right: 0.75rem; }
.wheel { position: absolute; bottom: 0; width: 2.25rem; height: 1.25rem; border-radius: 9999px; background: #111827; }
.wheel-left { left: 0.5rem; }
.wheel-right { right: 0.5rem; }
.bumper { position: absolute; bottom: 0.25rem; left: 50%; transform: translateX(-50%); width: 4rem; height: 0.25rem; background: #374151; }

.airplane { position: absolute; top: 6rem; right: 4rem; filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15)); }

.sections { position: relative; background: linear-gradient(#f8fafc, #fff, #f1f5f9); }
.section { min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 2rem; border-bottom: 1px solid #e2e8f0; }
.inner { max-width: 64rem; margin: 0 auto; }
.centered { text-align: center; }
.split { display: grid; gap: 3rem; align-items: center; }
@media (min-width: 768px) { .split { grid-template-columns: 1fr 1fr; } }
.hero { padding-top: 8rem; }
.hero h1 { font-size: 4.5rem; font-weight: 800; margin: 0 0 1.5rem; }
.subtitle { font-size: 1.875rem; font-weight: 300; color: #374151; }
.tagline { font-size: 1.125rem; color: #4b5563; max-width: 42rem; margin: 0 auto; }
.panel { margin-top: 3rem; padding: 2.5rem; border-radius: 1rem; background: rgba(255, 255, 255, 0.9); border: 1px solid #e2e8f0; box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); }
.legend { display: grid; gap: 1rem; text-align: left; }
@media (min-width: 768px) { .legend { grid-template-columns: 1fr 1fr; } }
.legend-card { display: flex; align-items: center; gap: 1rem; padding: 1rem; border-radius: 0.5rem; }
.legend-speed { font-size: 1.875rem; font-weight: 700; }
.legend-label { font-weight: 600; }
.legend-caption { font-size: 0.875rem; color: #4b5563; }
.accent-blue { background: #eff6ff; } .accent-blue .legend-speed { color: #2563eb; }
.accent-slate { background: #f8fafc; } .accent-slate .legend-speed { color: #475569; }
.accent-emerald { background: #ecfdf5; } .accent-emerald .legend-speed { color: #059669; }
.accent-amber { background: #fffbeb; } .accent-amber .legend-speed { color: #d97706; }
.scroll-hint { display: inline-block; margin-top: 3rem; padding: 0.5rem 1rem; border-radius: 9999px; border: 1px solid #e2e8f0; animation: bounce 1s infinite; }
@keyframes bounce { 0%, 100% { transform: translateY(-25%); } 50% { transform: none; } }
.design { background: linear-gradient(#eff6ff, #fff, #eef2ff); }
.section h2 { font-size: 3rem; font-weight: 700; margin: 0 0 1.5rem; }
.lead { font-size: 1.25rem; line-height: 1.6; color: #374151; }
.highlights { list-style: none; margin: 0; padding: 2rem; border-radius: 1rem; background: linear-gradient(135deg, #dbeafe, #f3e8ff); }
.highlights li { display: flex; align-items: center; gap: 0.75rem; padding: 0.5rem 0; font-weight: 500; }
.dot { width: 0.75rem; height: 0.75rem; border-radius: 9999px; background: #22c55e; }
.cards { display: grid; gap: 2rem; margin-top: 3rem; }
@media (min-width: 768px) { .cards { grid-template-columns: repeat(3, 1fr); } }
.card { padding: 1.5rem; border-radius: 0.75rem; background: #f8fafc; box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1); }
.icon { font-size: 2.25rem; margin-bottom: 1rem; }
.cta { color: #fff; background: linear-gradient(#0f172a, #020617, #000); border-bottom: none; }
.cta .lead { color: #d1d5db; }
.badge { padding: 1.5rem; border-radius: 0.75rem; background: rgba(255, 255, 255, 0.1); border: 1px solid rgba(255, 255, 255, 0.2); }

@media (prefers-reduced-motion: reduce) { .parallax-layer { transition: none !important; } .scroll-hint { animation: none; } }
"#;
