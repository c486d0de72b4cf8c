pub mod trajectory_plot;
