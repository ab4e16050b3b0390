mod convex_hull;
mod decomposition_properties;
mod decomposition_scenarios;
mod meshes;
