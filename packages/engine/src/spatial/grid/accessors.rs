mod cells;
mod liquid;
