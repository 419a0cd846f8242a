mod driver;
mod link;
mod routing;
mod sim_time;
mod topology;
mod units;
